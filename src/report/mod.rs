//! Exportação de relatórios HTML.
//!
//! Monta um documento HTML estático com os gráficos do dashboard
//! embutidos via vega-embed, pronto para download e compartilhamento.

mod charts;
mod html;

pub use charts::{time_series_spec, ChartSpec};
pub use html::{generate_html_report, report_filename};
