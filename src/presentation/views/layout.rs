const BRAND: &str = "EduSpeak AI";

const STYLESHEET: &str = r#"
:root{--bg:#f6f8ff;--ink:#0f172a;--muted:#4b5563;--card:#fff;--line:#e5e7eb;--grad:linear-gradient(135deg,#7c8cfb,#6ee7b7);--shadow:0 8px 30px rgba(17,24,39,.08)}
*{box-sizing:border-box}
body{margin:0;color:var(--ink);background:var(--bg);font-family:'Plus Jakarta Sans',system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif}
.nav{position:fixed;inset:0 0 auto 0;z-index:50;background:rgba(255,255,255,.85);backdrop-filter:blur(12px);border-bottom:1px solid var(--line)}
.wrap{max-width:1100px;margin:0 auto;display:flex;align-items:center;justify-content:space-between;padding:12px 18px}
.brand{display:flex;gap:.7rem;align-items:center;text-decoration:none;color:var(--ink);font-weight:800}
.badge{width:38px;height:38px;border-radius:12px;background:var(--grad);display:grid;place-items:center;color:#fff}
.links a{color:var(--muted);text-decoration:none;padding:.55rem .9rem;border-radius:12px}
.links a:hover,.links a.active{background:#eef2ff;color:#3730a3}
main{padding:92px 16px 40px}
.container{max-width:1100px;margin:0 auto}
.card{background:var(--card);border:1px solid var(--line);border-radius:16px;box-shadow:var(--shadow);padding:22px}
.btn{border:0;border-radius:12px;padding:.9rem 1.2rem;font-weight:700;cursor:pointer;display:inline-flex;gap:.6rem;align-items:center;text-decoration:none}
.btn-primary{background:var(--grad);color:#fff}
.btn-outline{background:#fff;color:#3730a3;border:2px solid #e0e7ff}
.btn-success{background:linear-gradient(135deg,#22c55e,#60a5fa);color:#fff}
.input,textarea,select{width:100%;background:#fff;border:1px solid var(--line);color:var(--ink);border-radius:12px;padding:12px;font-family:inherit}
textarea{min-height:110px}
.textbox{white-space:pre-wrap;background:#fff;border:1px solid var(--line);border-radius:12px;padding:12px;font-family:ui-monospace,Menlo,Monaco,monospace;max-height:380px;overflow:auto}
.textbox.ok{border-color:#86efac;background:#f0fdf4}
.grid{display:grid;gap:14px}
.grid-2{grid-template-columns:repeat(auto-fit,minmax(360px,1fr))}
.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:14px}
.feature{background:#fff;border:1px solid var(--line);border-radius:14px;padding:16px;box-shadow:var(--shadow)}
.err{background:#fef2f2;border:1px solid #fecaca;padding:10px 12px;border-radius:12px;color:#991b1b}
.footer{margin-top:30px;color:var(--muted);text-align:center}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Transcribe,
    Enhance,
    Translate,
    Speak,
}

impl NavPage {
    const ALL: [NavPage; 5] = [
        NavPage::Home,
        NavPage::Transcribe,
        NavPage::Enhance,
        NavPage::Translate,
        NavPage::Speak,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::Transcribe => "/transcribe",
            NavPage::Enhance => "/enhance",
            NavPage::Translate => "/translate",
            NavPage::Speak => "/speak",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::Transcribe => "Transcribe",
            NavPage::Enhance => "Enhance",
            NavPage::Translate => "Translate",
            NavPage::Speak => "Speech",
        }
    }
}

/// Escapes text for use inside element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps already-rendered `content` in the shared page chrome.
pub fn render_page(content: &str, title: &str, active: NavPage) -> String {
    let links: String = NavPage::ALL
        .iter()
        .map(|page| {
            let class = if *page == active { "active" } else { "" };
            format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                page.path(),
                class,
                page.label()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1.0"/>
<title>{title} | {brand}</title>
<link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css" rel="stylesheet">
<style>{style}</style>
</head>
<body>
  <nav class="nav">
    <div class="wrap">
      <a class="brand" href="/"><div class="badge"><i class="fas fa-graduation-cap"></i></div><span>{brand}</span></a>
      <div class="links">{links}</div>
    </div>
  </nav>
  <main>
    <div class="container">{content}</div>
  </main>
</body>
</html>"#,
        title = escape_html(title),
        brand = BRAND,
        style = STYLESHEET,
        links = links,
        content = content,
    )
}
