mod layout;
mod pages;

pub use layout::{NavPage, escape_html, render_page};
pub use pages::{
    enhance_page, home_page, speak_page, transcribe_page, translate_form_page,
    translation_result_page,
};
