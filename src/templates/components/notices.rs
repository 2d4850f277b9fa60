use crate::session::{Notice, NoticeLevel};
use maud::{html, Markup};

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice success",
        NoticeLevel::Info => "notice info",
        NoticeLevel::Warning => "notice warning",
        NoticeLevel::Error => "notice error",
    }
}

pub fn notice(level: NoticeLevel, text: &str) -> Markup {
    html! {
        div class=(level_class(level)) role="status" { (text) }
    }
}

pub fn notice_list(notices: &[Notice]) -> Markup {
    html! {
        @for n in notices {
            (notice(n.level, &n.text))
        }
    }
}
