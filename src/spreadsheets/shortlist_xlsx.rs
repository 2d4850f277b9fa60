use crate::domain::Favorite;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

/// Workbook bytes with one row per shortlisted property.
pub fn shortlist_xlsx(favorites: &[Favorite]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Headers
    let headers = ["Name", "Location", "Price"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, fav) in favorites.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in [&fav.name, &fav.location, &fav.price].iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value.as_str())
                .map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write row {}: {}", r, e))
                })?;
        }
    }

    worksheet
        .set_column_width(0, 32)
        .and_then(|ws| ws.set_column_width(1, 32))
        .map_err(|e| ServerError::XlsxError(format!("Failed to size columns: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
