use crate::application::services::{EnhancementOutcome, TranscriptionOutcome, TranslationOutcome};

use super::layout::{NavPage, escape_html, render_page};

const TRANSLATION_LANGUAGES: [&str; 16] = [
    "Spanish",
    "French",
    "German",
    "Hindi",
    "Urdu",
    "Bengali",
    "Punjabi",
    "Arabic",
    "Turkish",
    "Portuguese",
    "Chinese (Simplified)",
    "Tamil",
    "Gujarati",
    "Polish",
    "Ukrainian",
    "Swahili",
];

const FOLLOW_UP_ACTIONS: &str = r#"<div style="display:flex; gap:10px; flex-wrap:wrap; margin-top:10px">
    <a class="btn btn-outline" href="/translate"><i class="fas fa-language"></i> Translate</a>
    <a class="btn btn-success" href="/speak"><i class="fas fa-volume-up"></i> Speak</a>
  </div>"#;

fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="card" style="margin-top:12px"><div class="err"><i class="fas fa-triangle-exclamation"></i> {}</div></div>"#,
        escape_html(message)
    )
}

pub fn home_page() -> String {
    let content = r#"
<section class="card">
  <h1 style="margin:.3rem 0">Turn speech into learning, fast.</h1>
  <p>Convert audio into clear notes, improve writing, translate into other languages, and listen back with natural speech.</p>
  <div style="display:flex; gap:10px; flex-wrap:wrap; margin-top:14px">
    <a href="/transcribe" class="btn btn-primary"><i class="fas fa-microphone"></i> Try Transcription</a>
    <a href="/translate" class="btn btn-outline"><i class="fas fa-language"></i> Translate a sample</a>
  </div>
</section>
<section class="card" style="margin-top:18px">
  <div class="features">
    <div class="feature"><h3>Smart Transcription</h3><p>Whisper-based speech-to-text for recordings and lectures.</p></div>
    <div class="feature"><h3>Language Enhancement</h3><p>Fix grammar and improve clarity while keeping your meaning.</p></div>
    <div class="feature"><h3>Quick Translation</h3><p>Translate into many languages for multilingual classrooms.</p></div>
    <div class="feature"><h3>Text-to-Speech</h3><p>A slower, clear voice for comprehension and accessibility.</p></div>
  </div>
</section>
<p class="footer">Built for teachers &amp; learners</p>
"#;
    render_page(content, "Home", NavPage::Home)
}

pub fn transcribe_page(outcome: Option<&TranscriptionOutcome>, error: Option<&str>) -> String {
    let mut content = String::from(
        r#"
<div class="card" style="margin-top:6px">
  <h2 style="margin:0 0 8px 0"><i class="fas fa-microphone"></i> Transcribe Audio</h2>
  <form method="POST" enctype="multipart/form-data">
    <label class="textbox" style="display:block; cursor:pointer;">
      <div id="pick" style="text-align:center">Click to choose a file (WAV / MP3 / M4A / FLAC)</div>
      <input type="file" name="audio" id="audio" accept=".wav,.mp3,.m4a,.flac" style="display:none"/>
    </label>
    <div style="text-align:center; margin-top:10px">
      <button class="btn btn-primary" type="submit"><i class="fas fa-bolt"></i> Upload &amp; Transcribe</button>
    </div>
  </form>
</div>
<script>
document.getElementById('audio').addEventListener('change', function(e){
  var f = e.target.files[0]; if(!f) return;
  document.getElementById('pick').textContent = 'Ready: ' + f.name + ' (' + (f.size/1024/1024).toFixed(2) + ' MB)';
});
</script>
"#,
    );

    if let Some(outcome) = outcome {
        content.push_str(&format!(
            r#"
<div class="grid grid-2" style="margin-top:12px">
  <div class="card"><h3 style="margin:0 0 6px 0">Raw Transcript</h3>
  <div class="textbox">{}</div></div>
  <div class="card"><h3 style="margin:0 0 6px 0">Enhanced</h3>
  <div class="textbox ok">{}</div>
  {}</div>
</div>"#,
            escape_html(&outcome.transcript),
            escape_html(&outcome.enhanced),
            FOLLOW_UP_ACTIONS
        ));
    }

    if let Some(message) = error {
        content.push_str(&error_panel(message));
    }

    render_page(&content, "Transcribe", NavPage::Transcribe)
}

pub fn enhance_page(outcome: Option<&EnhancementOutcome>, error: Option<&str>) -> String {
    let original = outcome.map(|o| o.original.as_str()).unwrap_or_default();

    let mut content = format!(
        r#"
<div class="card">
  <h2 style="margin:0 0 8px 0"><i class="fas fa-wand-magic-sparkles"></i> Enhance Text</h2>
  <form method="POST">
    <textarea name="text" class="input" placeholder="Paste text to polish...">{}</textarea>
    <div style="text-align:center; margin-top:10px">
      <button class="btn btn-primary"><i class="fas fa-magic"></i> Enhance</button>
    </div>
  </form>
</div>
"#,
        escape_html(original)
    );

    if let Some(outcome) = outcome {
        content.push_str(&format!(
            r#"
<div class="grid grid-2" style="margin-top:12px">
  <div class="card"><h3>Original</h3><div class="textbox">{}</div></div>
  <div class="card"><h3>Enhanced</h3><div class="textbox ok">{}</div>
  {}</div>
</div>"#,
            escape_html(&outcome.original),
            escape_html(&outcome.enhanced),
            FOLLOW_UP_ACTIONS
        ));
    }

    if let Some(message) = error {
        content.push_str(&error_panel(message));
    }

    render_page(&content, "Enhance", NavPage::Enhance)
}

pub fn translate_form_page() -> String {
    let options: String = TRANSLATION_LANGUAGES
        .iter()
        .map(|lang| format!("<option>{}</option>", escape_html(lang)))
        .collect();

    let content = format!(
        r#"
<div class="card">
  <h2 style="margin:0 0 8px 0"><i class="fas fa-language"></i> Translate</h2>
  <form method="POST">
    <div class="grid grid-2">
      <div>
        <label>Target language</label>
        <select name="lang" class="input">
          <option value="" selected>Spanish (default)</option>
          {}
        </select>
      </div>
      <div style="display:flex; align-items:end; justify-content:flex-end">
        <button class="btn btn-success" type="submit"><i class="fas fa-globe"></i> Translate</button>
      </div>
    </div>
    <label>Text</label>
    <textarea name="text" class="input" placeholder="Enter English text..."></textarea>
  </form>
</div>
"#,
        options
    );

    render_page(&content, "Translate", NavPage::Translate)
}

/// Standalone page, deliberately outside the shared layout.
pub fn translation_result_page(outcome: &TranslationOutcome) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>Translated to {lang}</title>
<style>body{{background:#f6f8ff;color:#0f172a;font-family:'Plus Jakarta Sans',sans-serif;padding:24px}} .box{{white-space:pre-wrap;background:#fff;border:1px solid #e5e7eb;border-radius:12px;padding:14px;box-shadow:0 8px 30px rgba(17,24,39,.08)}}</style>
</head><body><h2 style="margin:0 0 10px 0">Translated to {lang}</h2><div class="box">{text}</div><p style="margin-top:12px"><a href="/translate" style="color:#3730a3;text-decoration:none">New translation</a></p></body></html>"#,
        lang = escape_html(outcome.language.as_str()),
        text = escape_html(&outcome.translated),
    )
}

pub fn speak_page() -> String {
    let content = r#"
<div class="card">
  <h2 style="margin:0 0 8px 0"><i class="fas fa-volume-up"></i> Text to Speech</h2>
  <form method="POST">
    <textarea name="text" class="input" placeholder="Enter text..." required></textarea>
    <div style="display:flex; gap:10px; flex-wrap:wrap; justify-content:center; margin-top:10px">
      <button class="btn btn-success" type="submit"><i class="fas fa-download"></i> Download WAV</button>
      <button class="btn btn-outline" type="button" onclick="previewSpeech(event)"><i class="fas fa-play"></i> Preview in Browser</button>
    </div>
  </form>
</div>
<script>
function previewSpeech(ev){
  const area = document.querySelector('textarea[name="text"]');
  const text = (area.value || '').trim();
  if(!text){alert('Please enter text.');return;}
  if(!('speechSynthesis' in window)){alert('Browser TTS not supported.');return;}
  speechSynthesis.cancel();
  const u = new SpeechSynthesisUtterance(text);
  u.lang='en-GB'; u.rate=0.6; u.pitch=1.0;
  const male = speechSynthesis.getVoices().find(v => /male|david|mark|daniel|alex|george|tom/i.test(v.name));
  if(male) u.voice = male;
  const btn = ev.currentTarget; const orig = btn.innerHTML; btn.innerHTML='Speaking...'; btn.disabled=true;
  u.onend=()=>{btn.innerHTML=orig;btn.disabled=false;};
  u.onerror=()=>{btn.innerHTML=orig;btn.disabled=false;alert('Speech error.');};
  speechSynthesis.speak(u);
}
</script>
"#;
    render_page(content, "Speak", NavPage::Speak)
}
