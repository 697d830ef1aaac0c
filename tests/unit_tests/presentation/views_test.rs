use eduspeak::application::services::TranslationOutcome;
use eduspeak::domain::TargetLanguage;
use eduspeak::presentation::views::{
    NavPage, escape_html, render_page, translate_form_page, translation_result_page,
};

#[test]
fn given_markup_when_escaping_then_encodes_special_characters() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn given_active_page_when_rendering_then_marks_only_that_link() {
    let html = render_page("<p>body</p>", "Speech", NavPage::Speak);

    assert!(html.contains("<title>Speech | EduSpeak AI</title>"));
    assert!(html.contains(r#"<a href="/speak" class="active">Speech</a>"#));
    assert!(html.contains(r#"<a href="/translate" class="">Translate</a>"#));
    assert_eq!(html.matches(r#"class="active""#).count(), 1);
    assert!(html.contains("<p>body</p>"));
}

#[test]
fn given_translate_form_when_rendering_then_offers_spanish_default_and_languages() {
    let html = translate_form_page();

    assert!(html.contains(r#"<option value="" selected>Spanish (default)</option>"#));
    assert!(html.contains("<option>French</option>"));
    assert!(html.contains(r#"name="text""#));
}

#[test]
fn given_translation_outcome_when_rendering_then_escapes_and_links_back() {
    let outcome = TranslationOutcome {
        language: TargetLanguage::parse(Some("French")),
        translated: "Bonjour <script>".to_string(),
    };

    let html = translation_result_page(&outcome);

    assert!(html.contains("<title>Translated to French</title>"));
    assert!(html.contains("Bonjour &lt;script&gt;"));
    assert!(html.contains(r#"href="/translate""#));
}
