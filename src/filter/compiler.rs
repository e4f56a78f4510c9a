//! Compilador de filtros para cláusulas WHERE.

use chrono::NaiveDate;

use crate::{QuadroError, QuadroResult};

/// Seleção de datas vinda da camada de apresentação.
///
/// Uma data única ou um par ordenado (início, fim) com início <= fim.
/// Imutável depois de construído.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Uma única data de calendário.
    Single(NaiveDate),

    /// Intervalo fechado de datas.
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    /// Cria um intervalo (início, fim).
    ///
    /// Falha com [`QuadroError::InvalidDateRange`] se início > fim,
    /// em vez de produzir uma cláusula malformada.
    pub fn between(start: NaiveDate, end: NaiveDate) -> QuadroResult<Self> {
        if start > end {
            return Err(QuadroError::InvalidDateRange { start, end });
        }
        Ok(Self::Between { start, end })
    }

    /// Cria um filtro de data única.
    pub fn single(date: NaiveDate) -> Self {
        Self::Single(date)
    }
}

/// Compilador de filtros de data em fragmentos SQL.
///
/// A coluna de data é fixada pela configuração. A compilação é uma
/// função pura da entrada: sem efeitos colaterais, sem IO.
///
/// Predicados extras são interpolados verbatim na cláusula, sem
/// parametrização. Superfície de injeção conhecida do template;
/// o chamador é responsável pelo conteúdo dos predicados.
#[derive(Debug, Clone)]
pub struct FilterCompiler {
    date_column: String,
}

impl FilterCompiler {
    /// Cria um compilador para a coluna de data configurada.
    pub fn new(date_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
        }
    }

    /// Retorna a coluna de data.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Compila a seleção de datas e predicados extras em uma cláusula WHERE.
    ///
    /// - Intervalo: `DATE(<col>) BETWEEN '<início>' AND '<fim>'`
    /// - Data única: `DATE(<col>) = '<data>'`
    /// - Predicados extras são anexados com `AND`, preservando a ordem
    /// - Sem nenhum predicado, retorna string vazia (o chamador omite
    ///   a palavra-chave `WHERE`)
    pub fn compile(&self, date_range: Option<&DateRange>, extra: &[String]) -> String {
        let mut conditions: Vec<String> = Vec::new();

        match date_range {
            Some(DateRange::Between { start, end }) => {
                conditions.push(format!(
                    "DATE({}) BETWEEN '{}' AND '{}'",
                    self.date_column,
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                ));
            }
            Some(DateRange::Single(date)) => {
                conditions.push(format!(
                    "DATE({}) = '{}'",
                    self.date_column,
                    date.format("%Y-%m-%d")
                ));
            }
            None => {}
        }

        conditions.extend(extra.iter().cloned());

        if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn compiler() -> FilterCompiler {
        FilterCompiler::new("your_date_column")
    }

    #[test]
    fn test_compile_range() {
        let range = DateRange::between(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let clause = compiler().compile(Some(&range), &[]);

        assert_eq!(
            clause,
            "WHERE DATE(your_date_column) BETWEEN '2024-01-01' AND '2024-01-31'"
        );
    }

    #[test]
    fn test_compile_single_date_with_extra() {
        let single = DateRange::single(date(2024, 5, 1));
        let clause = compiler().compile(Some(&single), &["region = 'US'".to_string()]);

        assert_eq!(
            clause,
            "WHERE DATE(your_date_column) = '2024-05-01' AND region = 'US'"
        );
    }

    #[test]
    fn test_compile_empty() {
        assert_eq!(compiler().compile(None, &[]), "");
    }

    #[test]
    fn test_compile_extra_only() {
        let clause = compiler().compile(
            None,
            &["region = 'US'".to_string(), "status = 'active'".to_string()],
        );

        assert_eq!(clause, "WHERE region = 'US' AND status = 'active'");
    }

    #[test]
    fn test_compile_preserves_predicate_order() {
        let clause = compiler().compile(None, &["a = 1".to_string(), "b = 2".to_string()]);
        let reversed = compiler().compile(None, &["b = 2".to_string(), "a = 1".to_string()]);

        assert_eq!(clause, "WHERE a = 1 AND b = 2");
        assert_eq!(reversed, "WHERE b = 2 AND a = 1");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let range = DateRange::between(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let extra = vec!["region = 'US'".to_string()];

        let first = compiler().compile(Some(&range), &extra);
        let second = compiler().compile(Some(&range), &extra);

        assert_eq!(first, second);
    }

    #[test]
    fn test_range_start_after_end_rejected() {
        let result = DateRange::between(date(2024, 2, 1), date(2024, 1, 1));

        assert!(matches!(
            result,
            Err(QuadroError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_range_same_day_allowed() {
        let range = DateRange::between(date(2024, 3, 15), date(2024, 3, 15)).unwrap();
        let clause = compiler().compile(Some(&range), &[]);

        assert!(clause.contains("BETWEEN '2024-03-15' AND '2024-03-15'"));
    }

    #[test]
    fn test_custom_date_column() {
        let compiler = FilterCompiler::new("created_at");
        let single = DateRange::single(date(2024, 5, 1));

        assert_eq!(
            compiler.compile(Some(&single), &[]),
            "WHERE DATE(created_at) = '2024-05-01'"
        );
    }
}
