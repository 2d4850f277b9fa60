use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

pub fn desktop_layout(title: &str, sidebar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                style { (PreEscaped(STYLES)) }
                script src=(LEAFLET_JS) {}
                script src=(LEAFLET_HEAT_JS) {}
                script { (PreEscaped(MAP_SCRIPT)) }
            }
            body {
                div class="shell" {
                    aside class="sidebar" {
                        (sidebar)
                    }
                    main class="main" {
                        (content)
                    }
                }
            }
        }
    }
}

const STYLES: &str = r#"
:root { --bg: #0e1117; --panel: #1a1d24; --line: #2c313c; --text: #fafafa; --muted: #a3a8b8; --accent: #ff4b4b; --ok: #21c354; --warn: #ffbd45; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
a { color: #7cc4ff; }
.shell { display: grid; grid-template-columns: 320px 1fr; min-height: 100vh; }
.sidebar { background: var(--panel); border-right: 1px solid var(--line); padding: 1.25rem; overflow-y: auto; }
.main { padding: 2rem 3rem; max-width: 1200px; }
h1 { font-size: 2.2rem; margin: 0 0 .25rem; }
h2 { font-size: 1.35rem; margin: 1.5rem 0 .75rem; }
h3 { font-size: 1.05rem; margin: 1.25rem 0 .5rem; }
.caption { color: var(--muted); margin: 0 0 1.5rem; }
.card { background: var(--panel); border: 1px solid var(--line); border-radius: 10px; padding: 1rem 1.25rem; margin: 1rem 0; }
.card h2 { margin-top: 0; }
label { display: block; font-size: .85rem; color: var(--muted); margin: .6rem 0 .25rem; }
input[type=text], input[type=email], input[type=password], input[type=number], select {
  width: 100%; padding: .5rem .6rem; border-radius: 6px; border: 1px solid var(--line); background: var(--bg); color: var(--text); }
input[type=range] { width: 100%; }
.checks label { display: inline-flex; gap: .3rem; align-items: center; margin-right: .75rem; color: var(--text); }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
button, .btn { display: inline-block; padding: .5rem 1rem; border-radius: 6px; border: 1px solid var(--line); background: var(--panel); color: var(--text); cursor: pointer; text-decoration: none; font-size: .9rem; margin-top: .6rem; }
button.primary { background: var(--accent); border-color: var(--accent); width: 100%; font-weight: 600; }
button.star { margin: 0; padding: .2rem .55rem; }
.notice { border-radius: 6px; padding: .6rem .9rem; margin: .5rem 0; border-left: 4px solid; }
.notice.success { background: rgba(33,195,84,.12); border-color: var(--ok); }
.notice.info { background: rgba(28,131,225,.12); border-color: #1c83e1; }
.notice.warning { background: rgba(255,189,69,.12); border-color: var(--warn); }
.notice.error { background: rgba(255,75,75,.12); border-color: var(--accent); }
.env-ok { color: var(--ok); font-size: .85rem; }
table { width: 100%; border-collapse: collapse; margin: .5rem 0; }
th, td { text-align: left; padding: .45rem .6rem; border-bottom: 1px solid var(--line); }
th { color: var(--muted); font-weight: 500; }
.map { height: 420px; border-radius: 10px; margin: .75rem 0; }
details { background: var(--panel); border: 1px solid var(--line); border-radius: 10px; padding: .75rem 1rem; margin: 1rem 0; }
details summary { cursor: pointer; font-weight: 600; }
.fav { border-bottom: 1px solid var(--line); padding: .4rem 0; font-size: .9rem; }
.fav .muted, .muted { color: var(--muted); }
.markdown table { font-size: .9rem; }
"#;

// Popup text is set with textContent; nothing from the data is parsed as HTML.
const MAP_SCRIPT: &str = r#"
function renderMap(id, data) {
  if (typeof L === 'undefined') { return; }
  var map = L.map(id).setView([data.center.lat, data.center.lon], data.zoom);
  L.tileLayer('https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png', {
    attribution: '&copy; OpenStreetMap contributors &copy; CARTO', maxZoom: 19
  }).addTo(map);
  function popup(lines) {
    var box = document.createElement('div');
    lines.forEach(function (line, i) {
      var el = document.createElement(i === 0 ? 'strong' : 'div');
      el.textContent = line;
      box.appendChild(el);
    });
    return box;
  }
  data.markers.forEach(function (m) {
    var layer = m.circle
      ? L.circleMarker([m.lat, m.lon], { radius: 8, color: '#ff4b4b', fillColor: '#ff4b4b', fillOpacity: 0.7 })
      : L.marker([m.lat, m.lon], { title: m.title });
    layer.bindPopup(popup(m.lines)).addTo(map);
  });
  if (data.heat.length && L.heatLayer) {
    L.heatLayer(data.heat, { radius: 25, blur: 15, minOpacity: 0.4 }).addTo(map);
  }
}
"#;
