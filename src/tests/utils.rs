use crate::app::AppState;
use crate::config::AppConfig;
use crate::feed::{FeedError, FeedSource};
use astra::{Body, Request, Response};
use http::Method;
use chrono::NaiveDate;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Two facilities: a mostly-verified urban school and a rural one with no
/// responsible party. Column names mix current and historical headers.
pub const FIXTURE_CSV: &str = "\
CODLOCAL ,SECTOR,REGION,DEPARTAMENTO,PROVINCIA,DISTRITO,CENTROPOBLADO,NOMBRE_IIEE,DRE_UGEL,RURALIDAD,ESTUDIANTES,COD_MODULAR,MONTOTOTAL_PROGRAMADO,MONTO_TRANSFERENCIAS,MONTO_RETIRADO,RESPONSABLE_SIN_RESPONSABLE,RESPONSABLE_CON_CUENTA,FECHA_REGISTRO,NOTA,ESTADOFAM,TOTAL_FAM,FECHA_PRIMERENVIO_FAM,FECHA_VERIF_FAM,ESTADO_PCA,FECHA_ENVIO_PCA,FECHA_VERIF_PCA,ESTADO_DG,MONTO_DG,FECHA_ENVIO_DG,FECHA_VERIF_DG
1234.0,EDUCACION,LIMA METROPOLITANA,LIMA,LIMA,COMAS,COMAS,IE 2022 SAN MARTIN,UGEL 04,URBANO,350,0654321,\"S/ 1,000\",1000,250,0,1,2026-03-10,,VERIFICADA,\"S/ 12,500\",2026-04-02,2026-04-15,,,,Pendiente,\"2,000\",15/07/2026,por revisar
45678,EDUCACION,CUSCO,CUSCO,URUBAMBA,OLLANTAYTAMBO,PATACANCHA,IE 50123,UGEL URUBAMBA,RURAL,42,0543210,\"1,000\",\"1,000\",\"1,500\",1,0,,Sin dato de contacto,Sin Registrar,N/A,,,VERIFICADO,,,verificada,abc,,
";

/// Serves a fixed CSV body and counts how often it was asked for.
pub struct StaticFeed {
    body: String,
    calls: Arc<AtomicUsize>,
}

impl StaticFeed {
    pub fn new(body: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let feed = Self {
            body: body.to_string(),
            calls: Arc::clone(&calls),
        };
        (feed, calls)
    }
}

impl FeedSource for StaticFeed {
    fn fetch(&self) -> Result<String, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Succeeds once, then fails every time after.
pub struct FlakyFeed {
    body: String,
    calls: AtomicUsize,
}

impl FlakyFeed {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FeedSource for FlakyFeed {
    fn fetch(&self) -> Result<String, FeedError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(self.body.clone())
        } else {
            Err(FeedError::Network("connection refused".into()))
        }
    }
}

pub struct DownFeed;

impl FeedSource for DownFeed {
    fn fetch(&self) -> Result<String, FeedError> {
        Err(FeedError::Status(503, "Service Unavailable".into()))
    }
}

pub fn fixture_state() -> AppState {
    let (feed, _) = StaticFeed::new(FIXTURE_CSV);
    AppState::new(Box::new(feed), &AppConfig::default())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
