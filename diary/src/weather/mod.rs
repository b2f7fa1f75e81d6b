//! Current-weather lookup against the OpenWeatherMap API.
//!
//! [`WeatherClient::fetch_raw`] returns the body of a successful response or a
//! [`WeatherError`](crate::error::WeatherError) naming the failure channel
//! (missing key, transport, non-2xx status). [`parse_weather`] plucks
//! `main.temp`, `weather[0].main` and `weather[0].icon` out of that body.

mod client;
mod parse;

pub use client::WeatherClient;
pub use parse::parse_weather;
