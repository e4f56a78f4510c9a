//! Especificações de gráficos para o relatório.

use serde_json::json;

use crate::types::table::ResultTable;

/// Um gráfico do relatório.
///
/// O spec é uma string opaca repassada ao vega-embed no HTML final;
/// nenhum parse ou validação acontece aqui.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Id do elemento `<div>` no documento.
    pub id: String,

    /// Título exibido acima do gráfico.
    pub title: String,

    /// Spec vega-lite serializado (opaco).
    pub spec_json: String,
}

impl ChartSpec {
    /// Cria um gráfico a partir de um spec já serializado.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        spec_json: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            spec_json: spec_json.into(),
        }
    }
}

/// Monta o gráfico de série temporal padronizado do template.
///
/// Linha com pontos, eixo x temporal, eixo y quantitativo e tooltip,
/// com os dados da tabela embutidos no spec.
pub fn time_series_spec(
    table: &ResultTable,
    x_col: &str,
    y_col: &str,
    title: &str,
) -> ChartSpec {
    let y_title = if title.is_empty() { y_col } else { title };

    let spec = json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": title,
        "height": 300,
        "width": "container",
        "data": { "values": table.rows.clone() },
        "mark": { "type": "line", "point": true },
        "encoding": {
            "x": { "field": x_col, "type": "temporal", "title": "Date" },
            "y": { "field": y_col, "type": "quantitative", "title": y_title },
            "tooltip": [
                { "field": x_col, "type": "temporal", "title": "Date" },
                { "field": y_col, "type": "quantitative", "title": "Value", "format": ",.2f" }
            ]
        }
    });

    ChartSpec::new(
        format!("chart_{}", y_col),
        title.to_string(),
        spec.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ResultTable {
        ResultTable::from_json_rows(
            r#"[
                {"date": "2024-01-01", "record_count": 10},
                {"date": "2024-01-02", "record_count": 20}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_time_series_spec_structure() {
        let chart = time_series_spec(&sample_table(), "date", "record_count", "Registros");

        assert_eq!(chart.id, "chart_record_count");
        assert_eq!(chart.title, "Registros");

        let spec: serde_json::Value = serde_json::from_str(&chart.spec_json).unwrap();
        assert_eq!(spec["encoding"]["x"]["field"], "date");
        assert_eq!(spec["encoding"]["x"]["type"], "temporal");
        assert_eq!(spec["encoding"]["y"]["field"], "record_count");
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_time_series_spec_empty_title_uses_column() {
        let chart = time_series_spec(&sample_table(), "date", "record_count", "");

        let spec: serde_json::Value = serde_json::from_str(&chart.spec_json).unwrap();
        assert_eq!(spec["encoding"]["y"]["title"], "record_count");
    }
}
