//! Forward and reverse geocoding over the Mapbox Places API.

use reqwest::Url;
use wardrive_core::GeoPoint;

use crate::client::MapboxClient;
use crate::error::MapboxError;
use crate::types::GeocodingResponse;

impl MapboxClient {
    /// Resolves a human-entered place description to coordinates.
    ///
    /// Takes the best-ranked feature's center.
    ///
    /// # Errors
    ///
    /// - [`MapboxError::AddressNotFound`] — the query matched nothing;
    ///   callers abort the current planning attempt.
    /// - [`MapboxError::Http`] / [`MapboxError::UnexpectedStatus`] /
    ///   [`MapboxError::Deserialize`] — transport and decode failures.
    pub async fn forward_geocode(&self, query: &str) -> Result<GeoPoint, MapboxError> {
        let url = self.geocoding_url(query)?;
        let response: GeocodingResponse = self
            .get_json(url, &format!("forward geocode of \"{query}\""))
            .await?;

        response
            .features
            .into_iter()
            .next()
            .map(|feature| GeoPoint::new(feature.center[1], feature.center[0]))
            .ok_or_else(|| MapboxError::AddressNotFound {
                query: query.to_owned(),
            })
    }

    /// Returns the closest known place name, or `None` when the service
    /// has nothing for that position.
    ///
    /// # Errors
    ///
    /// Transport and decode failures only; an unnamed location is not an
    /// error.
    pub async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>, MapboxError> {
        let query = format!("{},{}", point.longitude, point.latitude);
        let url = self.geocoding_url(&query)?;
        let response: GeocodingResponse = self
            .get_json(url, &format!("reverse geocode of {query}"))
            .await?;

        Ok(response
            .features
            .into_iter()
            .next()
            .map(|feature| feature.place_name))
    }

    fn geocoding_url(&self, query: &str) -> Result<Url, MapboxError> {
        let file = format!("{query}.json");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| MapboxError::Api("base URL cannot hold a path".to_owned()))?
            .extend(["geocoding", "v5", "mapbox.places", file.as_str()]);
        url.query_pairs_mut()
            .append_pair("limit", "1")
            .append_pair("access_token", &self.token);
        Ok(url)
    }
}
