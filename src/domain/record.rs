// src/domain/record.rs

use crate::domain::normalize::is_absent;
use std::collections::HashMap;

/// Logical fields read from the sheet.
///
/// The same field has been published under different column headers over time
/// (and sometimes only under the bare spreadsheet column letter), so each one
/// carries an ordered list of candidate headers. The first present, non-empty
/// value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Codlocal,

    // Institution
    Sector,
    Region,
    Departamento,
    Provincia,
    Distrito,
    CentroPoblado,
    NombreIiee,
    DreUgel,
    Ruralidad,
    Estudiantes,
    CodModular,

    // Amounts
    MontoProgramado,
    MontoTransferido,
    MontoRetirado,

    // Responsible party
    SinResponsable,
    ConCuenta,
    FechaRegistro,
    Nota,

    // FAM
    EstadoFam,
    MontoFam,
    FechaEnvioFam,
    FechaVerifFam,

    // PCA
    EstadoPca,
    FechaEnvioPca,
    FechaVerifPca,

    // DG
    EstadoDg,
    MontoDg,
    FechaEnvioDg,
    FechaVerifDg,
}

impl Field {
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Codlocal => &["CODLOCAL"],

            Field::Sector => &["SECTOR"],
            Field::Region => &["REGION"],
            Field::Departamento => &["DEPARTAMENTO"],
            Field::Provincia => &["PROVINCIA"],
            Field::Distrito => &["DISTRITO"],
            Field::CentroPoblado => &["CENTROPOBLADO"],
            Field::NombreIiee => &["NOMBRE_IIEE"],
            Field::DreUgel => &["DRE_UGEL"],
            Field::Ruralidad => &["RURALIDAD"],
            Field::Estudiantes => &["ESTUDIANTES"],
            Field::CodModular => &["COD_MODULAR"],

            Field::MontoProgramado => &["MONTOTOTAL_PROGRAMADO"],
            Field::MontoTransferido => &["MONTO_TRANSFERENCIAS"],
            Field::MontoRetirado => &["MONTO_RETIRADO"],

            Field::SinResponsable => &["RESPONSABLE_SIN_RESPONSABLE"],
            Field::ConCuenta => &["RESPONSABLE_CON_CUENTA"],
            Field::FechaRegistro => &["FECHA_REGISTRO"],
            Field::Nota => &["NOTA"],

            Field::EstadoFam => &["ESTADO_FAM", "ESTADOFAM", "AS"],
            Field::MontoFam => &["MONTO_FAM", "TOTAL_FAM", "BZ"],
            Field::FechaEnvioFam => &["FECHA_PRIMERENVIO_FAM", "FECHA_ENVIO_FAM"],
            Field::FechaVerifFam => &["FECHA_VERIFICACION_FAM", "FECHA_VERIF_FAM"],

            Field::EstadoPca => &["ESTADO_PCA", "CA"],
            Field::FechaEnvioPca => &["FECHA_ENVIO_PCA", "FECHAPRIMERENVIO_PCA", "CD"],
            Field::FechaVerifPca => &["FECHA_VERIF_PCA", "FECHAVERIF_PCA", "CF"],

            Field::EstadoDg => &["ESTADO_DG", "CS"],
            Field::MontoDg => &["MONTO_DG", "DZ"],
            Field::FechaEnvioDg => &["FECHA_ENVIO_DG", "FECHA_PRIMERENVIO_DG", "CV"],
            Field::FechaVerifDg => &["FECHA_VERIF_DG", "FECHAVERIF_DG", "CX"],
        }
    }
}

/// One row of the sheet: header -> raw cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: HashMap<String, String>,
}

impl Record {
    pub fn new(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// The normalized facility code. Set by the loader for every row it keeps.
    pub fn codlocal(&self) -> &str {
        self.get(Field::Codlocal.aliases()[0]).unwrap_or_default()
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        resolve_field(self, field.aliases())
    }
}

/// A repeated column name keeps its first value.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cells = HashMap::new();
        for (k, v) in iter {
            cells.entry(k.into()).or_insert_with(|| v.into());
        }
        Self::new(cells)
    }
}

/// First candidate column that is present and not absent, in caller order.
pub fn resolve_field<'a>(record: &'a Record, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|name| record.get(name))
        .find(|value| !is_absent(Some(*value)))
}

pub fn resolve_or<'a>(record: &'a Record, candidates: &[&str], default: &'a str) -> &'a str {
    resolve_field(record, candidates).unwrap_or(default)
}

/// The loaded sheet. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Record>,
    index: HashMap<String, usize>,
    keys: Vec<String>,
}

impl Table {
    /// Builds the lookup index. Rows are expected to carry a normalized code;
    /// when a code repeats, the first row keeps it.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            index.entry(row.codlocal().to_string()).or_insert(i);
        }

        let mut keys: Vec<String> = index.keys().cloned().collect();
        keys.sort();

        Self { rows, index, keys }
    }

    /// Sorted, unique facility codes.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn select_record(&self, codlocal: &str) -> Option<&Record> {
        self.index.get(codlocal).map(|&i| &self.rows[i])
    }
}
