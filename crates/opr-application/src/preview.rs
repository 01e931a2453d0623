//! Print preview renderer.
//!
//! Renders the report into a self-contained A4 HTML document. The output
//! depends only on the report, so the same report always yields the same
//! bytes. All user text is HTML-escaped by the template engine.

use minijinja::{Environment, context};
use opr_core::Result;
use opr_core::report::Report;

const TEMPLATE_NAME: &str = "opr_preview.html";

const PREVIEW_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ms">
<head>
<meta charset="utf-8">
<title>{{ report.programName or "Laporan Aktiviti" }}</title>
<style>
@page { size: A4 portrait; margin: 0; }
body { margin: 0; font-family: "Times New Roman", serif; font-size: 11pt; color: #000; }
.a4-paper { box-sizing: border-box; width: 210mm; min-height: 297mm; padding: 15mm; display: flex; flex-direction: column; }
.header { border-bottom: 2px solid #000; padding-bottom: 4mm; margin-bottom: 6mm; text-align: center; text-transform: uppercase; }
.header h1 { font-size: 16pt; margin: 0 0 1mm; }
.header h2 { font-size: 14pt; margin: 0; }
table.info { width: 100%; border-collapse: collapse; margin-bottom: 6mm; }
table.info td { border: 1px solid #000; padding: 2mm; }
table.info td.label { background: #f1f5f9; font-weight: bold; width: 25%; }
h3 { font-size: 11pt; border-bottom: 1px solid #000; display: inline-block; margin: 0 0 2mm; }
.placeholder { color: #94a3b8; font-style: italic; }
.summary { text-align: justify; white-space: pre-wrap; }
.photos { display: grid; grid-template-columns: 1fr 1fr; gap: 4mm; }
.photo { aspect-ratio: 16 / 9; border: 1px solid #cbd5e1; background: #f8fafc; overflow: hidden; display: flex; align-items: center; justify-content: center; }
.photo img { width: 100%; height: 100%; object-fit: cover; }
.caption { font-size: 9pt; font-style: italic; text-align: center; margin-top: 1mm; }
.signatures { display: grid; grid-template-columns: 1fr 1fr; gap: 8mm; margin-top: auto; padding-top: 8mm; text-align: center; font-size: 9pt; }
.signature-line { border-bottom: 1px dotted #000; width: 75%; margin: 12mm auto 1mm; }
</style>
</head>
<body>
<div class="a4-paper">
<div class="header">
<h1>{{ report.schoolName }}</h1>
<h2>Laporan Aktiviti (One Page Report)</h2>
</div>
<table class="info">
<tr><td class="label">Nama Program</td><td colspan="3">{{ report.programName or "-" }}</td></tr>
<tr><td class="label">Tarikh</td><td>{{ report.date or "-" }}</td><td class="label">Tempat</td><td>{{ report.venue or "-" }}</td></tr>
<tr><td class="label">Penganjur</td><td>{{ report.organizer or "-" }}</td><td class="label">Sasaran</td><td>{{ report.participants or "-" }}</td></tr>
</table>
<section class="objectives">
<h3>Objektif Program</h3>
<ol>
{%- for objective in report.objectives %}
<li>{{ objective }}</li>
{%- else %}
<li class="placeholder">Tiada objektif dinyatakan...</li>
{%- endfor %}
</ol>
</section>
<section>
<h3>Laporan Ringkas / Impak</h3>
{%- if report.executiveSummary %}
<p class="summary">{{ report.executiveSummary }}</p>
{%- else %}
<p class="summary placeholder">Laporan program akan dipaparkan di sini...</p>
{%- endif %}
</section>
<section>
<h3>Dokumentasi Bergambar</h3>
<div class="photos">
{%- for image in report.images %}
<figure>
<div class="photo">
{%- if image %}
<img src="{{ image }}" alt="Gambar {{ loop.index }}">
{%- else %}
<span class="placeholder">Ruang Gambar {{ loop.index }}</span>
{%- endif %}
</div>
<figcaption class="caption">Gambar {{ loop.index }}</figcaption>
</figure>
{%- endfor %}
</div>
</section>
<div class="signatures">
<div><p>Disediakan Oleh:</p><div class="signature-line"></div><p><strong>({{ report.preparedBy|upper }})</strong></p></div>
<div><p>Disahkan Oleh:</p><div class="signature-line"></div><p><strong>({{ report.verifiedBy|upper }})</strong></p></div>
</div>
</div>
</body>
</html>
"#;

/// Renders `report` as a printable HTML document.
pub fn render_preview(report: &Report) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, PREVIEW_TEMPLATE)?;
    let html = env
        .get_template(TEMPLATE_NAME)?
        .render(context! { report => report })?;
    Ok(html)
}
