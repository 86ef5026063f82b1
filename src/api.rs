pub mod moderate;
pub mod tokens;

pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("serde: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("server returned {status}")]
    Api {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
}

async fn read_json<T>(resp: reqwest::Response) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.without_url())?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail);
        return Err(Error::Api { status, detail });
    }

    Ok(serde_json::from_str(&body)?)
}

impl Client {
    pub fn new(base_url: impl AsRef<str>, token: impl AsRef<str>) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse().unwrap());
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token.as_ref()).parse().unwrap(),
        );
        Self {
            client: reqwest::ClientBuilder::new()
                .default_headers(headers)
                .build()
                .unwrap(),
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
        }
    }

    pub async fn moderate(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<moderate::SafetyReport, Error> {
        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(bytes).file_name(file_name.into()),
        );

        let resp = self
            .client
            .post(format!("{}/moderate", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        read_json(resp).await
    }

    pub async fn create_token(
        &self,
        req: &tokens::CreateRequest,
    ) -> Result<tokens::TokenGrant, Error> {
        let resp = self
            .client
            .post(format!("{}/auth/tokens", self.base_url))
            .json(req)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        read_json(resp).await
    }

    pub async fn list_tokens(&self) -> Result<Vec<tokens::TokenGrant>, Error> {
        let resp = self
            .client
            .get(format!("{}/auth/tokens", self.base_url))
            .send()
            .await
            .map_err(|e| e.without_url())?;

        read_json(resp).await
    }

    pub async fn revoke_token(&self, token: &str) -> Result<tokens::Detail, Error> {
        let resp = self
            .client
            .delete(format!("{}/auth/tokens/{}", self.base_url, token))
            .send()
            .await
            .map_err(|e| e.without_url())?;

        read_json(resp).await
    }
}
