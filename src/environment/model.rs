use url::Url;

const LOGOUT_PATH: &str = "/logout";

/// Thin client for the few instance endpoints the shell touches. Calls
/// return `Result<_, String>` with the failure already formatted for
/// logging.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub url: String,
    client: reqwest::Client,
}

impl Model {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Ends the server-side session. Fire and forget: callers neither wait
    /// for nor act on the outcome.
    pub async fn logout(&self) -> Result<(), String> {
        let endpoint = self.endpoint(LOGOUT_PATH)?;
        self.client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| format!("Logout Error: {e:?}"))?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        let base = Url::parse(&self.url)
            .map_err(|e| format!("Invalid instance url {}: {e:?}", self.url))?;
        base.join(path)
            .map_err(|e| format!("Invalid endpoint {path}: {e:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_endpoint_joins_onto_the_instance() {
        let model = Model::new("https://gnusocial.example".to_string());
        let endpoint = model.endpoint(LOGOUT_PATH).unwrap();
        assert_eq!(endpoint.as_str(), "https://gnusocial.example/logout");
    }

    #[test]
    fn bad_instance_urls_format_an_error() {
        let model = Model::new("not a url".to_string());
        assert!(model.endpoint(LOGOUT_PATH).is_err());
    }
}
