//! Geração do documento HTML do relatório.

use chrono::Local;

use super::charts::ChartSpec;

/// Gera o documento HTML completo do relatório.
///
/// Templating de string puro: para cada gráfico, um `<div>` com o id e
/// uma chamada `vegaEmbed` com o spec opaco; o runtime vega vem de
/// script tags de CDN. O layout da página é fixo.
pub fn generate_html_report(charts: &[ChartSpec], report_title: &str) -> String {
    let mut chart_divs = String::new();
    let mut embed_scripts = String::new();

    for chart in charts {
        chart_divs.push_str(&format!(
            r#"
            <div class="chart-box">
                <h3>{}</h3>
                <div id="{}"></div>
            </div>
"#,
            chart.title, chart.id
        ));
        embed_scripts.push_str(&format!(
            "vegaEmbed('#{}', {});\n",
            chart.id, chart.spec_json
        ));
    }

    let generated_at = Local::now().format("%Y-%m-%d %H:%M");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{report_title}</title>
    <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            padding: 20px;
            background-color: #f4f4f4;
            margin: 0;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}
        h1 {{ color: #1f2937; margin-bottom: 10px; }}
        h2 {{ color: #374151; margin-top: 40px; border-bottom: 2px solid #e5e7eb; padding-bottom: 10px; }}
        h3 {{ color: #4b5563; margin-bottom: 15px; }}
        .chart-box {{
            margin-bottom: 40px;
            padding: 20px;
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            background: #fafafa;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
            gap: 20px;
        }}
        .timestamp {{ color: #6b7280; font-size: 0.9em; }}
        hr {{ border: none; border-top: 1px solid #e5e7eb; margin: 20px 0; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{report_title}</h1>
        <p class="timestamp">Generated on: {generated_at}</p>
        <hr>

        <div class="grid">
{chart_divs}
        </div>
    </div>

    <script type="text/javascript">
{embed_scripts}
    </script>
</body>
</html>
"#
    )
}

/// Nome de arquivo com timestamp para o relatório gerado.
pub fn report_filename(prefix: &str) -> String {
    format!("{}_{}.html", prefix, Local::now().format("%Y%m%d_%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_charts() -> Vec<ChartSpec> {
        vec![
            ChartSpec::new("chart_1", "Registros por dia", r#"{"mark": "line"}"#),
            ChartSpec::new("chart_2", "Métrica total", r#"{"mark": "bar"}"#),
        ]
    }

    #[test]
    fn test_report_contains_cdn_runtime() {
        let html = generate_html_report(&sample_charts(), "Meu Relatório");

        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega@5"));
        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega-lite@5"));
        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega-embed@6"));
    }

    #[test]
    fn test_report_has_div_and_embed_per_chart() {
        let html = generate_html_report(&sample_charts(), "Meu Relatório");

        assert!(html.contains(r#"<div id="chart_1">"#));
        assert!(html.contains(r#"<div id="chart_2">"#));
        assert!(html.contains(r#"vegaEmbed('#chart_1', {"mark": "line"});"#));
        assert!(html.contains(r#"vegaEmbed('#chart_2', {"mark": "bar"});"#));
    }

    #[test]
    fn test_report_title_and_chart_titles() {
        let html = generate_html_report(&sample_charts(), "Meu Relatório");

        assert!(html.contains("<title>Meu Relatório</title>"));
        assert!(html.contains("<h1>Meu Relatório</h1>"));
        assert!(html.contains("<h3>Registros por dia</h3>"));
    }

    #[test]
    fn test_spec_is_passed_through_verbatim() {
        // O spec é opaco: nada é parseado nem validado
        let charts = vec![ChartSpec::new("c", "t", "not even json")];
        let html = generate_html_report(&charts, "R");

        assert!(html.contains("vegaEmbed('#c', not even json);"));
    }

    #[test]
    fn test_report_without_charts() {
        let html = generate_html_report(&[], "Vazio");

        assert!(html.contains("<h1>Vazio</h1>"));
        assert!(html.contains("Generated on:"));
        assert!(!html.contains("vegaEmbed"));
    }

    #[test]
    fn test_report_filename_format() {
        let name = report_filename("dashboard");

        assert!(name.starts_with("dashboard_"));
        assert!(name.ends_with(".html"));
        // dashboard_YYYYMMDD_HHMM.html
        assert_eq!(name.len(), "dashboard_".len() + 13 + ".html".len());
    }
}
