use crate::api::ResourceApi;
use crate::resource::{Device, GroupedLight, Light, Room, Scene, Zone};
use crate::transport::Transport;
use crate::value::ResourceIdentifier;
use crate::TransportError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::net::IpAddr;
use std::time::Duration;

/// Default per request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);
/// Longer `Retry-After` requests are not waited out.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(30);
const DEFAULT_RATE_LIMIT_RETRIES: u32 = 2;

/// Everything needed to talk to one bridge.
///
/// ### Example
/// ```no_run
/// use std::time::Duration;
///
/// let bridge = hueclient::BridgeConfig::new("192.168.0.4", "rVV05G0i52vQMMLn6BK3dpr0F3uDiqtDjPLPK2uj")
///     .with_timeout(Duration::from_secs(5))
///     .connect()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    base_url: String,
    application_key: String,
    timeout: Duration,
    accept_invalid_certs: bool,
    max_rate_limit_retries: u32,
}

impl BridgeConfig {
    /// `host` is a hostname or IP address; IPv6 addresses may be given bare.
    pub fn new(host: &str, application_key: impl Into<String>) -> Self {
        let host = match host.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => format!("[{ip}]"),
            _ => host.to_string(),
        };
        Self {
            base_url: format!("https://{host}/clip/v2"),
            application_key: application_key.into(),
            timeout: REQUEST_TIMEOUT,
            accept_invalid_certs: false,
            max_rate_limit_retries: DEFAULT_RATE_LIMIT_RETRIES,
        }
    }

    /// ### Example
    /// ```
    /// let config = hueclient::BridgeConfig::for_ip([192u8, 168, 0, 4], "key");
    /// assert_eq!(config.base_url(), "https://192.168.0.4/clip/v2");
    /// ```
    pub fn for_ip(ip: impl Into<IpAddr>, application_key: impl Into<String>) -> Self {
        Self::new(&ip.into().to_string(), application_key)
    }

    /// Replaces the API root, e.g. to go through a proxy.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Accepts any certificate the bridge presents.
    ///
    /// Bridges sign their certificate with the Signify root, which is always
    /// trusted, but the certificate names the bridge id rather than its
    /// address, and older firmware uses a self-signed one. Only enable this on
    /// a network you trust.
    pub fn danger_accept_invalid_certs(self, accept: bool) -> Self {
        Self {
            accept_invalid_certs: accept,
            ..self
        }
    }

    /// How many times a request answered with HTTP 429 is retried.
    pub fn with_max_rate_limit_retries(self, retries: u32) -> Self {
        Self {
            max_rate_limit_retries: retries,
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the HTTP client. Nothing is sent until the first request.
    pub fn connect(self) -> Result<Bridge, TransportError> {
        Ok(Bridge {
            client: create_reqwest_client(&self.application_key, self.accept_invalid_certs)?,
            base_url: self.base_url,
            timeout: self.timeout,
            max_rate_limit_retries: self.max_rate_limit_retries,
        })
    }
}

fn create_reqwest_client(
    application_key: &str,
    accept_invalid_certs: bool,
) -> Result<reqwest::Client, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("hue-application-key"),
        HeaderValue::from_str(application_key).map_err(|_| {
            TransportError::InvalidConfig("application key is not a valid header value".into())
        })?,
    );
    let client = reqwest::Client::builder()
        // see https://developers.meethue.com/develop/application-design-guidance/using-https/
        .add_root_certificate(reqwest::Certificate::from_pem(SIGNIFY_ROOT_CA)?)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .default_headers(headers)
        .connection_verbose(true)
        .tcp_keepalive(Some(Duration::from_secs(5)))
        .build()?;
    Ok(client)
}

const SIGNIFY_ROOT_CA: &[u8] = b"-----BEGIN CERTIFICATE-----
MIICMjCCAdigAwIBAgIUO7FSLbaxikuXAljzVaurLXWmFw4wCgYIKoZIzj0EAwIw
OTELMAkGA1UEBhMCTkwxFDASBgNVBAoMC1BoaWxpcHMgSHVlMRQwEgYDVQQDDAty
b290LWJyaWRnZTAiGA8yMDE3MDEwMTAwMDAwMFoYDzIwMzgwMTE5MDMxNDA3WjA5
MQswCQYDVQQGEwJOTDEUMBIGA1UECgwLUGhpbGlwcyBIdWUxFDASBgNVBAMMC3Jv
b3QtYnJpZGdlMFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEjNw2tx2AplOf9x86
aTdvEcL1FU65QDxziKvBpW9XXSIcibAeQiKxegpq8Exbr9v6LBnYbna2VcaK0G22
jOKkTqOBuTCBtjAPBgNVHRMBAf8EBTADAQH/MA4GA1UdDwEB/wQEAwIBhjAdBgNV
HQ4EFgQUZ2ONTFrDT6o8ItRnKfqWKnHFGmQwdAYDVR0jBG0wa4AUZ2ONTFrDT6o8
ItRnKfqWKnHFGmShPaQ7MDkxCzAJBgNVBAYTAk5MMRQwEgYDVQQKDAtQaGlsaXBz
IEh1ZTEUMBIGA1UEAwwLcm9vdC1icmlkZ2WCFDuxUi22sYpLlwJY81Wrqy11phcO
MAoGCCqGSM49BAMCA0gAMEUCIEBYYEOsa07TH7E5MJnGw557lVkORgit2Rm1h3B2
sFgDAiEA1Fj/C3AN5psFMjo0//mrQebo0eKd3aWRx+pQY08mk48=
-----END CERTIFICATE-----";

/// The bridge is the central access point of the lamps in a Hue setup, and also the central
/// access point of this library.
#[derive(Debug, Clone)]
pub struct Bridge {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
    max_rate_limit_retries: u32,
}

impl Bridge {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// ### Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// let bridge = hueclient::BridgeConfig::new("192.168.0.4", "rVV05G0i52vQMMLn6BK3dpr0F3uDiqtDjPLPK2uj")
    ///     .connect()
    ///     .unwrap();
    /// for light in &bridge.lights().list().await.unwrap().resources {
    ///     println!("{:?}", light);
    /// }
    /// # })
    /// ```
    pub fn lights(&self) -> ResourceApi<'_, Light, Self> {
        ResourceApi::new(self)
    }

    /// ### Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// use hueclient::value::RecallAction;
    ///
    /// let bridge = hueclient::BridgeConfig::new("192.168.0.4", "rVV05G0i52vQMMLn6BK3dpr0F3uDiqtDjPLPK2uj")
    ///     .connect()
    ///     .unwrap();
    /// bridge
    ///     .scenes()
    ///     .recall("e1a7c0b4-2d3f-4c5a-8b9e-0f1d2c3b4a59", RecallAction::Active)
    ///     .await
    ///     .unwrap();
    /// # })
    /// ```
    pub fn scenes(&self) -> ResourceApi<'_, Scene, Self> {
        ResourceApi::new(self)
    }

    pub fn rooms(&self) -> ResourceApi<'_, Room, Self> {
        ResourceApi::new(self)
    }

    pub fn zones(&self) -> ResourceApi<'_, Zone, Self> {
        ResourceApi::new(self)
    }

    pub fn grouped_lights(&self) -> ResourceApi<'_, GroupedLight, Self> {
        ResourceApi::new(self)
    }

    pub fn devices(&self) -> ResourceApi<'_, Device, Self> {
        ResourceApi::new(self)
    }

    /// Sends one request and unwraps the response envelope, retrying while the
    /// bridge answers 429.
    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Value>,
        timeout: Option<Duration>,
    ) -> Result<Vec<Value>, TransportError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            log::debug!("{method} {url}");
            let mut request = self
                .client
                .request(method.clone(), url)
                .timeout(timeout.unwrap_or(self.timeout));
            if let Some(payload) = payload {
                request = request.json(payload);
            }
            let response = request.send().await?;
            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempts > self.max_rate_limit_retries {
                    return Err(TransportError::RateLimited { attempts });
                }
                let wait = retry_after(response.headers()).unwrap_or(DEFAULT_RETRY_AFTER);
                if wait > MAX_RETRY_AFTER {
                    log::warn!("{method} {url} rate limited for {wait:?}, giving up");
                    return Err(TransportError::RateLimited { attempts });
                }
                log::warn!("{method} {url} rate limited, retrying in {wait:?}");
                tokio::time::sleep(wait).await;
                continue;
            }
            let body = response.text().await?;
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            let envelope: BridgeResponseV2 = serde_json::from_str(&body)
                .map_err(|err| TransportError::Envelope(err.to_string()))?;
            return envelope.get();
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let seconds: f64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
    if seconds.is_nan() || seconds < 0.0 {
        return None;
    }
    Some(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
}

impl Transport for Bridge {
    async fn fetch(&self, path: &str, timeout: Option<Duration>) -> Result<Value, TransportError> {
        let data = self.send(Method::GET, &self.url(path), None, timeout).await?;
        Ok(Value::Array(data))
    }

    async fn replace(
        &self,
        path: &str,
        id: &str,
        payload: &Value,
        timeout: Option<Duration>,
    ) -> Result<(), TransportError> {
        let url = self.url(&format!("{path}/{id}"));
        self.send(Method::PUT, &url, Some(payload), timeout).await?;
        Ok(())
    }

    async fn create(
        &self,
        path: &str,
        payload: &Value,
        timeout: Option<Duration>,
    ) -> Result<ResourceIdentifier, TransportError> {
        let data = self
            .send(Method::POST, &self.url(path), Some(payload), timeout)
            .await?;
        let created = data
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::Envelope("no identifier in create response".into()))?;
        serde_json::from_value(created).map_err(|err| TransportError::Envelope(err.to_string()))
    }

    async fn remove(
        &self,
        path: &str,
        id: &str,
        timeout: Option<Duration>,
    ) -> Result<(), TransportError> {
        let url = self.url(&format!("{path}/{id}"));
        self.send(Method::DELETE, &url, None, timeout).await?;
        Ok(())
    }
}

#[derive(Debug, serde::Deserialize)]
struct BridgeErrorV2 {
    description: String,
}

#[derive(Debug, serde::Deserialize)]
struct BridgeResponseV2 {
    #[serde(default)]
    errors: Vec<BridgeErrorV2>,
    #[serde(default)]
    data: Vec<Value>,
}

impl BridgeResponseV2 {
    fn get(mut self) -> Result<Vec<Value>, TransportError> {
        if let Some(error) = self.errors.pop() {
            Err(TransportError::Bridge {
                description: error.description,
            })
        } else {
            Ok(self.data)
        }
    }
}
