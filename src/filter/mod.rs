//! Compilação de filtros de data em cláusulas SQL.
//!
//! Este módulo traduz a seleção de datas da camada de apresentação
//! (uma data única ou um intervalo) em um fragmento `WHERE` pronto
//! para interpolação no template de query.

mod compiler;

pub use compiler::{DateRange, FilterCompiler};
