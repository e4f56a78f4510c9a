//! Template da query de exemplo do dashboard.

use crate::types::config::ConnectionConfig;

/// Monta a query de agregação de exemplo do template.
///
/// A cláusula WHERE compilada é interpolada entre o FROM e o GROUP BY;
/// uma cláusula vazia é omitida por completo.
pub fn example_query(conn: &ConnectionConfig, where_clause: &str) -> String {
    let mut query = String::new();

    query.push_str("SELECT\n");
    query.push_str(&format!("    DATE({}) as date,\n", conn.date_column));
    query.push_str("    COUNT(*) as record_count,\n");
    query.push_str(&format!("    SUM({}) as total_metric\n", conn.metric_column));
    query.push_str(&format!(
        "FROM `{}.{}.{}`\n",
        conn.project_id, conn.dataset, conn.table
    ));

    if !where_clause.is_empty() {
        query.push_str(where_clause);
        query.push('\n');
    }

    query.push_str("GROUP BY 1\n");
    query.push_str("ORDER BY 1 DESC\n");
    query.push_str("LIMIT 1000");

    query
}
