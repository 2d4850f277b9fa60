use regex::Regex;
use std::sync::LazyLock;

static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(crores?|cr|lakhs?|lacs?|lkh|lk|l|thousand|k)?\b")
        .expect("price pattern compiles")
});

const RUPEES_PER_CRORE: f64 = 10_000_000.0;

/// Reads a free-text listing price and converts it to crores.
///
/// `1.2 Cr` -> 1.2, `₹85 Lakh` -> 0.85, `45 K` -> 0.0045, `₹ 1,20,00,000` -> 1.2.
/// The first number carrying a unit wins, so `2 BHK, 1.2 Cr` reads as 1.2.
/// A bare number below one lakh is taken to already be in crores.
pub fn parse_price_crores(text: &str) -> Option<f64> {
    let mut bare = None;
    for caps in PRICE.captures_iter(text) {
        let Ok(amount) = caps[1].replace(',', "").parse::<f64>() else {
            continue;
        };
        if let Some(unit) = caps.get(2) {
            return Some(to_crores(amount, &unit.as_str().to_ascii_lowercase()));
        }
        let rest = caps.get(0).map_or("", |m| &text[m.end()..]);
        if bare.is_none() && !is_room_count(rest) {
            bare = Some(amount);
        }
    }

    bare.map(|amount| {
        if amount >= 100_000.0 {
            amount / RUPEES_PER_CRORE
        } else {
            amount
        }
    })
}

fn to_crores(amount: f64, unit: &str) -> f64 {
    match unit {
        u if u.starts_with("cr") => amount,
        "k" | "thousand" => amount * 1_000.0 / RUPEES_PER_CRORE,
        _ => amount / 100.0,
    }
}

/// `2 BHK`, `3BHK` and the like.
fn is_room_count(rest: &str) -> bool {
    rest.trim_start()
        .get(..3)
        .is_some_and(|w| w.eq_ignore_ascii_case("bhk"))
}
