//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el frontend de administración.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Crear middleware de CORS configurado para desarrollo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect()
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_origins(&origins)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Todos los orígenes configurados sobreviven, no solo el último
    #[test]
    fn test_parse_origins_keeps_all_valid() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://admin.example.com".to_string(),
        ];
        assert_eq!(parse_origins(&origins).len(), 2);
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "not a\nheader value".to_string(),
        ];
        assert_eq!(parse_origins(&origins).len(), 1);
    }
}
