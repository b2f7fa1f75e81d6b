use serde::Deserialize;

use crate::error::WeatherError;
use crate::models::ParsedWeather;

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    icon: String,
}

/// Extract the condition label, icon id and temperature from a current-weather
/// response body. Every other field is ignored.
pub fn parse_weather(body: &str) -> Result<ParsedWeather, WeatherError> {
    let response: CurrentWeatherResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Parse("`weather` array is empty".to_string()))?;

    Ok(ParsedWeather {
        weather: condition.main,
        icon: condition.icon,
        temperature: response.main.temp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_the_three_fields() {
        let body = r#"{"main":{"temp":280.5},"weather":[{"main":"Rain","icon":"10d"}]}"#;
        let parsed = parse_weather(body).unwrap();
        assert_eq!(
            parsed,
            ParsedWeather {
                weather: "Rain".to_string(),
                icon: "10d".to_string(),
                temperature: 280.5,
            }
        );
    }

    #[test]
    fn ignores_extra_fields_and_later_conditions() {
        let body = r#"{
            "coord": {"lon": 126.98, "lat": 37.57},
            "weather": [
                {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01n"},
                {"id": 701, "main": "Mist", "description": "mist", "icon": "50n"}
            ],
            "main": {"temp": 271, "feels_like": 268.2, "humidity": 40},
            "name": "Seoul",
            "cod": 200
        }"#;
        let parsed = parse_weather(body).unwrap();
        assert_eq!(parsed.weather, "Clear");
        assert_eq!(parsed.icon, "01n");
        assert_eq!(parsed.temperature, 271.0);
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_weather("failed to get response").unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[test]
    fn rejects_error_payload() {
        let body = r#"{"cod":401,"message":"Invalid API key."}"#;
        let err = parse_weather(body).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[test]
    fn rejects_empty_weather_array() {
        let body = r#"{"main":{"temp":280.5},"weather":[]}"#;
        let err = parse_weather(body).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        let body = r#"{"main":{"temp":"warm"},"weather":[{"main":"Rain","icon":"10d"}]}"#;
        assert!(matches!(
            parse_weather(body).unwrap_err(),
            WeatherError::Parse(_)
        ));
    }
}
