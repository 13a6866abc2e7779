use std::env;
use std::io;
use std::path::PathBuf;
use chrono::{Local, NaiveDate};

use crate::planner::calendar::in_supported_range;

const DEFAULT_IMPORT_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_path: Option<PathBuf>,
    pub reference_date: NaiveDate,
    pub import_max_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> io::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid(format!("PORT must be a port number, got '{}'", raw)))?,
            Err(_) => 8080,
        };

        let data_path = env::var("PLANNER_DATA_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let reference_date = match env::var("PLANNER_REFERENCE_DATE") {
            Ok(raw) => parse_reference_date(&raw)?,
            Err(_) => Local::now().date_naive(),
        };

        let import_max_bytes = match env::var("IMPORT_MAX_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| invalid(format!("IMPORT_MAX_BYTES must be a positive integer, got '{}'", raw)))?,
            Err(_) => DEFAULT_IMPORT_MAX_BYTES,
        };

        Ok(Self {
            host,
            port,
            data_path,
            reference_date,
            import_max_bytes,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_reference_date(raw: &str) -> io::Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(format!("PLANNER_REFERENCE_DATE must be YYYY-MM-DD, got '{}'", raw)))?;
    if !in_supported_range(date) {
        return Err(invalid(format!("PLANNER_REFERENCE_DATE {} is outside the supported range", date)));
    }
    Ok(date)
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_must_be_iso_and_in_range() {
        assert_eq!(
            parse_reference_date(" 2024-01-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_reference_date("15/01/2024").is_err());
        assert!(parse_reference_date("1850-06-01").is_err());
    }
}
