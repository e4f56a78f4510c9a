//! Representação tabular dos resultados de query.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uma linha de resultado: mapeamento de nome de coluna para valor escalar.
pub type Row = serde_json::Map<String, Value>;

/// Tabela de resultados retornada pelo backend.
///
/// Sequência ordenada de linhas, cada linha um mapeamento de nome de
/// coluna para um valor escalar (string, número, booleano ou nulo).
/// Nenhuma validação de schema além do que o backend retorna.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultTable {
    /// Colunas na ordem reportada pelo backend.
    pub columns: Vec<String>,

    /// Linhas na ordem retornada.
    pub rows: Vec<Row>,
}

impl ResultTable {
    /// Cria uma tabela vazia.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria uma tabela a partir das linhas já parseadas.
    ///
    /// A ordem das colunas é tomada da primeira linha.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();

        Self { columns, rows }
    }

    /// Parseia a saída JSON do backend (array de objetos).
    pub fn from_json_rows(json: &str) -> crate::QuadroResult<Self> {
        let trimmed = json.trim();

        // bq imprime array vazio (ou nada) quando a query não retorna linhas
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        let rows: Vec<Row> = serde_json::from_str(trimmed)?;
        Ok(Self::from_rows(rows))
    }

    /// Número de linhas.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Verifica se a tabela está vazia.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Valor de uma célula, se existir.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Renderiza a tabela como texto de largura fixa para o terminal.
    pub fn render_text(&self) -> String {
        if self.columns.is_empty() {
            return String::from("(vazio)");
        }

        // Largura de cada coluna: máximo entre cabeçalho e células
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                let cell_max = self
                    .rows
                    .iter()
                    .map(|row| display_value(row.get(col).unwrap_or(&Value::Null)).len())
                    .max()
                    .unwrap_or(0);
                col.len().max(cell_max)
            })
            .collect();

        let mut output = String::new();

        for (col, width) in self.columns.iter().zip(&widths) {
            output.push_str(&format!("{:<w$}  ", col, w = *width));
        }
        output.push('\n');

        for width in &widths {
            output.push_str(&"-".repeat(*width));
            output.push_str("  ");
        }
        output.push('\n');

        for row in &self.rows {
            for (col, width) in self.columns.iter().zip(&widths) {
                let value = display_value(row.get(col).unwrap_or(&Value::Null));
                output.push_str(&format!("{:<w$}  ", value, w = *width));
            }
            output.push('\n');
        }

        output
    }
}

/// Formata um valor escalar para exibição.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> ResultTable {
        ResultTable::from_json_rows(
            r#"[
                {"date": "2024-01-01", "record_count": 42, "total_metric": 10.5},
                {"date": "2024-01-02", "record_count": 7, "total_metric": null}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_json_rows() {
        let table = sample_table();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns, vec!["date", "record_count", "total_metric"]);
        assert_eq!(table.cell(0, "record_count"), Some(&json!(42)));
        assert_eq!(table.cell(1, "total_metric"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_rows_empty_output() {
        let table = ResultTable::from_json_rows("").unwrap();
        assert!(table.is_empty());

        let table = ResultTable::from_json_rows("[]").unwrap();
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_from_json_rows_invalid() {
        let result = ResultTable::from_json_rows("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_text() {
        let table = sample_table();
        let rendered = table.render_text();

        assert!(rendered.contains("date"));
        assert!(rendered.contains("2024-01-01"));
        assert!(rendered.contains("42"));
        assert!(rendered.contains("NULL"));
    }

    #[test]
    fn test_render_text_empty() {
        let table = ResultTable::new();
        assert_eq!(table.render_text(), "(vazio)");
    }
}
