//! Integration tests for the TRIZ Trade REST API client.
//!
//! These tests verify serialization/deserialization of API types and client functionality.
//! For live API tests, set the `TRIZTRADE_API_URL` environment variable.

use triztrade::api::*;

// =============================================================================
// Type Serialization/Deserialization Tests
// =============================================================================

mod health_types {
    use super::*;

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{
            "status": "healthy",
            "service": "triz-trade-backend",
            "version": "1.0.0"
        }"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "triz-trade-backend");
        assert!(response.is_healthy());
    }

    #[test]
    fn test_health_response_unhealthy() {
        let json = r#"{"status": "degraded", "service": "triz-trade-backend", "version": "1.0.0"}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_healthy());
    }

    #[test]
    fn test_service_info_deserialize() {
        let json = r#"{
            "message": "TRIZ Trade API",
            "version": "1.0.0",
            "status": "active",
            "docs": "/docs"
        }"#;
        let info: ServiceInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.message, "TRIZ Trade API");
        assert_eq!(info.docs, "/docs");
    }
}

mod stock_types {
    use super::*;

    #[test]
    fn test_stock_deserialize() {
        let json = r#"{
            "id": "thyao",
            "symbol": "THYAO",
            "name": "Turk Hava Yollari A.O.",
            "sector": "Aviation",
            "price": 284.5,
            "change": 3.25,
            "change_percent": 1.16,
            "volume": 12450000,
            "market_cap": 392000000000.0,
            "last_update": "2024-01-15T10:30:00Z"
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.symbol, "THYAO");
        assert_eq!(stock.sector, "Aviation");
        assert_eq!(stock.volume, 12_450_000);
        assert_eq!(stock.market_cap, Some(392_000_000_000.0));
    }

    #[test]
    fn test_stock_without_market_cap() {
        let json = r#"{
            "id": "garan",
            "symbol": "GARAN",
            "name": "Turkiye Garanti Bankasi A.S.",
            "sector": "Banking",
            "price": 62.15,
            "change": -0.85,
            "change_percent": -1.35,
            "volume": 98000000,
            "last_update": "2024-01-15T10:30:00Z"
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert!(stock.market_cap.is_none());
        assert!(stock.change < 0.0);
    }

    #[test]
    fn test_stock_serialize_omits_absent_market_cap() {
        let json = r#"{
            "id": "garan",
            "symbol": "GARAN",
            "name": "Turkiye Garanti Bankasi A.S.",
            "sector": "Banking",
            "price": 62.15,
            "change": -0.85,
            "change_percent": -1.35,
            "volume": 98000000,
            "last_update": "2024-01-15T10:30:00Z"
        }"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&stock).unwrap();
        assert!(!out.contains("market_cap"));
    }

    #[test]
    fn test_stocks_response_deserialize() {
        let json = r#"{
            "stocks": [],
            "total": 0,
            "page": 1,
            "size": 20
        }"#;
        let response: StocksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.stocks.is_empty());
        assert_eq!(response.page, 1);
        assert_eq!(response.size, 20);
    }

    #[test]
    fn test_stock_price_minimal() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00Z",
            "price": 284.5,
            "change": 3.25,
            "change_percent": 1.16
        }"#;
        let point: StockPrice = serde_json::from_str(json).unwrap();
        assert_eq!(point.price, 284.5);
        assert!(point.open.is_none());
        assert!(point.volume.is_none());
    }

    #[test]
    fn test_stock_price_with_ohlcv() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00Z",
            "price": 284.5,
            "change": 3.25,
            "change_percent": 1.16,
            "volume": 12450000,
            "open": 281.0,
            "high": 286.0,
            "low": 280.25,
            "close": 284.5
        }"#;
        let point: StockPrice = serde_json::from_str(json).unwrap();
        assert_eq!(point.open, Some(281.0));
        assert_eq!(point.high, Some(286.0));
        assert_eq!(point.low, Some(280.25));
        assert_eq!(point.close, Some(284.5));
        assert_eq!(point.volume, Some(12_450_000));
    }

    #[test]
    fn test_stock_detail_response_deserialize() {
        let json = r#"{
            "stock": {
                "id": "thyao",
                "symbol": "THYAO",
                "name": "Turk Hava Yollari A.O.",
                "sector": "Aviation",
                "price": 284.5,
                "change": 3.25,
                "change_percent": 1.16,
                "volume": 12450000,
                "last_update": "2024-01-15T10:30:00Z"
            },
            "price_history": [
                {"timestamp": "2024-01-14T18:00:00Z", "price": 281.25, "change": -1.0, "change_percent": -0.35}
            ]
        }"#;
        let detail: StockDetailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(detail.stock.symbol, "THYAO");
        assert_eq!(detail.price_history.len(), 1);
    }

    #[test]
    fn test_stock_prices_response_deserialize() {
        let json = r#"{
            "stock_id": "thyao",
            "interval": "1d",
            "start_date": "2023-12-16T10:30:00Z",
            "end_date": "2024-01-15T10:30:00Z",
            "prices": []
        }"#;
        let response: StockPricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.stock_id, "thyao");
        assert_eq!(response.interval, "1d");
        assert!(response.prices.is_empty());
    }

    #[test]
    fn test_sectors_response_deserialize() {
        let json = r#"{"sectors": ["Aviation", "Banking", "Retail"]}"#;
        let response: SectorsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sectors.len(), 3);
        assert_eq!(response.sectors[1], "Banking");
    }

    #[test]
    fn test_interval_serialize() {
        assert_eq!(serde_json::to_string(&Interval::OneMinute).unwrap(), r#""1m""#);
        assert_eq!(serde_json::to_string(&Interval::FiveMinutes).unwrap(), r#""5m""#);
        assert_eq!(serde_json::to_string(&Interval::FifteenMinutes).unwrap(), r#""15m""#);
        assert_eq!(serde_json::to_string(&Interval::ThirtyMinutes).unwrap(), r#""30m""#);
        assert_eq!(serde_json::to_string(&Interval::OneHour).unwrap(), r#""1h""#);
        assert_eq!(serde_json::to_string(&Interval::OneDay).unwrap(), r#""1d""#);
    }

    #[test]
    fn test_interval_deserialize() {
        assert_eq!(serde_json::from_str::<Interval>(r#""1m""#).unwrap(), Interval::OneMinute);
        assert_eq!(serde_json::from_str::<Interval>(r#""1d""#).unwrap(), Interval::OneDay);
    }

    #[test]
    fn test_interval_as_str() {
        assert_eq!(Interval::OneMinute.as_str(), "1m");
        assert_eq!(Interval::OneHour.as_str(), "1h");
        assert_eq!(Interval::OneDay.as_str(), "1d");
    }

    #[test]
    fn test_interval_default() {
        assert_eq!(Interval::default(), Interval::OneDay);
    }

    #[test]
    fn test_stock_list_params_builder() {
        let params = StockListParams::new()
            .with_page(3)
            .with_size(25)
            .with_search("banka")
            .with_sector("Banking");

        assert_eq!(params.page, Some(3));
        assert_eq!(params.size, Some(25));
        assert_eq!(params.search.as_deref(), Some("banka"));
        assert_eq!(params.sector.as_deref(), Some("Banking"));
    }

    #[test]
    fn test_stock_list_params_identity() {
        let a = StockListParams::new().with_page(1).with_search("THY");
        let b = StockListParams::new().with_page(1).with_search("THY");
        let c = StockListParams::new().with_page(2).with_search("THY");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

mod currency_types {
    use super::*;

    #[test]
    fn test_currency_deserialize() {
        let json = r#"{
            "id": "usd-try",
            "symbol": "USD/TRY",
            "name": "US Dollar / Turkish Lira",
            "rate": 30.2415,
            "change": 0.1120,
            "change_percent": 0.37,
            "last_update": "2024-01-15T10:30:00Z"
        }"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.symbol, "USD/TRY");
        assert_eq!(currency.rate, 30.2415);
    }

    #[test]
    fn test_currencies_response_deserialize() {
        let json = r#"{
            "currencies": [],
            "total": 0,
            "page": 1,
            "size": 20
        }"#;
        let response: CurrenciesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.currencies.is_empty());
    }

    #[test]
    fn test_currency_rate_with_bid_ask() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00Z",
            "rate": 30.2415,
            "change": 0.1120,
            "change_percent": 0.37,
            "bid": 30.2398,
            "ask": 30.2431
        }"#;
        let rate: CurrencyRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.bid, Some(30.2398));
        assert_eq!(rate.ask, Some(30.2431));
    }

    #[test]
    fn test_currency_rates_response_deserialize() {
        let json = r#"{
            "currency_id": "usd-try",
            "start_date": null,
            "end_date": null,
            "rates": [
                {"timestamp": "2024-01-15T10:30:00Z", "rate": 30.2415, "change": 0.1120, "change_percent": 0.37}
            ]
        }"#;
        let response: CurrencyRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.currency_id, "usd-try");
        assert!(response.start_date.is_none());
        assert_eq!(response.rates.len(), 1);
    }

    #[test]
    fn test_currency_list_params_builder() {
        let params = CurrencyListParams::new().with_page(2).with_size(10).with_search("EUR");

        assert_eq!(params.page, Some(2));
        assert_eq!(params.size, Some(10));
        assert_eq!(params.search.as_deref(), Some("EUR"));
    }
}

mod data_types {
    use super::*;

    #[test]
    fn test_data_status_deserialize() {
        let json = r#"{
            "status": "active",
            "last_update": "2024-01-15T10:30:00Z",
            "stocks_count": 10,
            "currencies_count": 8,
            "data_sources": ["yfinance"]
        }"#;
        let status: DataStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, "active");
        assert_eq!(status.stocks_count, 10);
        assert_eq!(status.currencies_count, 8);
        assert_eq!(status.data_sources, vec!["yfinance"]);
    }

    #[test]
    fn test_data_health_deserialize() {
        let json = r#"{
            "status": "healthy",
            "services": {
                "yfinance": "active",
                "database": "connected",
                "cache": "active"
            }
        }"#;
        let health: DataHealth = serde_json::from_str(json).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.services.get("database").map(String::as_str), Some("connected"));
    }

    #[test]
    fn test_refresh_response_deserialize() {
        let json = r#"{"message": "Stock data refresh triggered", "status": "success"}"#;
        let response: RefreshResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "success");
    }
}

mod error_types {
    use super::*;

    #[test]
    fn test_error_response_fastapi_detail() {
        let json = r#"{"detail": "Stock not found"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.get_message(), "Stock not found");
    }

    #[test]
    fn test_error_response_standard_format() {
        let json = r#"{
            "status": "error",
            "message": "Error fetching stocks",
            "details": "upstream source unavailable"
        }"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.get_message(), "Error fetching stocks");
    }

    #[test]
    fn test_error_response_alternative_format() {
        let json = r#"{"error": "Invalid sector filter"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.get_message(), "Invalid sector filter");
    }

    #[test]
    fn test_error_response_fallback() {
        let json = r#"{}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.get_message(), "Unknown error");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound(ErrorResponse::from_text("Stock xyz not found".to_string()));
        assert_eq!(format!("{}", err), "Not found: Stock xyz not found");

        let err = ApiError::BadRequest(ErrorResponse {
            status: None,
            message: Some("Error fetching stocks".to_string()),
            details: Some("size out of range".to_string()),
        });
        assert_eq!(
            format!("{}", err),
            "Bad request: Error fetching stocks: size out of range"
        );

        let err = ApiError::UnexpectedStatus(418, ErrorResponse::from_text("I'm a teapot".to_string()));
        assert_eq!(format!("{}", err), "Unexpected status 418: I'm a teapot");
    }

    #[test]
    fn test_api_error_response_accessor() {
        let err = ApiError::NotFound(ErrorResponse {
            status: Some("error".to_string()),
            message: Some("Stock not found".to_string()),
            details: Some("no stock with id xyz".to_string()),
        });
        let resp = err.error_response().unwrap();
        assert_eq!(resp.message.as_deref(), Some("Stock not found"));
        assert_eq!(resp.details.as_deref(), Some("no stock with id xyz"));
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_api_error_status_code() {
        assert_eq!(
            ApiError::NotFound(ErrorResponse::from_text("x".into())).status_code(),
            Some(404)
        );
        assert_eq!(
            ApiError::BadRequest(ErrorResponse::from_text("x".into())).status_code(),
            Some(400)
        );
        assert_eq!(
            ApiError::Forbidden(ErrorResponse::from_text("x".into())).status_code(),
            Some(403)
        );
        assert_eq!(
            ApiError::RateLimited(ErrorResponse::from_text("x".into())).status_code(),
            Some(429)
        );
        assert_eq!(
            ApiError::Unauthorized(ErrorResponse::from_text("x".into())).status_code(),
            Some(401)
        );
        assert_eq!(
            ApiError::Conflict(ErrorResponse::from_text("x".into())).status_code(),
            Some(409)
        );
        assert_eq!(
            ApiError::NotImplemented(ErrorResponse::from_text("x".into())).status_code(),
            Some(501)
        );
        assert_eq!(
            ApiError::ServerError(ErrorResponse::from_text("x".into())).status_code(),
            Some(500)
        );
        assert_eq!(
            ApiError::UnexpectedStatus(418, ErrorResponse::from_text("x".into())).status_code(),
            Some(418)
        );
        assert_eq!(ApiError::Deserialize("x".into()).status_code(), None);
        assert_eq!(ApiError::InvalidParameter("x".into()).status_code(), None);
    }
}

mod client_tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TrizApiClient::new("https://api.triztrade.dev").unwrap();
        assert_eq!(client.base_url(), "https://api.triztrade.dev");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = TrizApiClient::new("https://api.triztrade.dev/").unwrap();
        assert_eq!(client.base_url(), "https://api.triztrade.dev");
    }

    #[test]
    fn test_client_builder() {
        let client = TrizApiClient::builder("https://api.triztrade.dev")
            .timeout_secs(60)
            .header("X-Custom-Header", "test-value")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://api.triztrade.dev");
    }

    #[tokio::test]
    async fn test_invalid_paging_rejected_before_io() {
        let client = TrizApiClient::new("https://api.triztrade.dev").unwrap();

        let err = client
            .get_stocks(&StockListParams::new().with_page(0))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));

        let err = client
            .get_currencies(&CurrencyListParams::new().with_size(101))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
    }
}

// =============================================================================
// Live API Tests (require TRIZTRADE_API_URL environment variable)
// =============================================================================

#[cfg(feature = "live_tests")]
mod live_tests {
    use super::*;

    fn get_client() -> Option<TrizApiClient> {
        std::env::var("TRIZTRADE_API_URL")
            .ok()
            .and_then(|url| TrizApiClient::new(&url).ok())
    }

    #[tokio::test]
    async fn test_live_health() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TRIZTRADE_API_URL not set");
            return;
        };

        let result = client.get_health().await;
        assert!(result.is_ok(), "Health check failed: {:?}", result);
    }

    #[tokio::test]
    async fn test_live_get_stocks() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TRIZTRADE_API_URL not set");
            return;
        };

        let result = client.get_stocks(&StockListParams::new()).await;
        assert!(result.is_ok(), "Get stocks failed: {:?}", result);
    }
}
