use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; background: #fff; color: #111; margin: 0; }
main.container { max-width: 1400px; margin: 0 auto; padding: 0.8rem 2rem; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 2rem; box-shadow: 0 1px 2px rgba(0,0,0,0.06); }
h1 { font-size: 1.4rem; margin: 0.2rem 0; }
h3 { margin: 0 0 0.4rem 0; }
.card { border: 1px solid #e6e6e6; border-radius: 12px; padding: 14px 16px; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.04); margin-top: 6px; }
.card p { margin: 0.15rem 0; }
.grid { display: grid; gap: 0.75rem; }
.grid-6 { grid-template-columns: repeat(6, minmax(0, 1fr)); }
.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.small-label { font-size: 0.75rem; color: #555; margin-bottom: 0.1rem; }
.small-value { font-size: 0.95rem; font-weight: 800; }
.monto-label { font-size: 1.05rem; color: #444; }
.monto-value { font-size: 1.45rem; font-weight: 800; margin-bottom: 0.55rem; }
.progress { background: #111; border-radius: 10px; height: 28px; overflow: hidden; }
.progress-bar { background: #2e7d32; height: 100%; }
.progress-label { font-size: 2rem; font-weight: 800; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 10px; font-weight: 700; font-size: 0.85rem; }
.badge-red { background: #ffe5e5; color: #b10000; }
.badge-green { background: #e7f8ed; color: #116b2a; }
.badge-yellow { background: #fff4cc; color: #7a5a00; }
.alert { padding: 6px 10px; border-radius: 8px; margin: 0.3rem 0; }
.alert-warning { background: #fff4cc; }
.alert-info { background: #e8f1fd; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Detalle por Código Local" }
                }
                (content)
            }
        }
    }
}
