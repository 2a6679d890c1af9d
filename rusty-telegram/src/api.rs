use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secstr::SecUtf8;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::input_file::{file_name, InputFile, StagedFile};
use crate::{methods, mime};

const USER_AGENT: &str = concat!("rusty-telegram/", env!("CARGO_PKG_VERSION"), " (Rust)");

pub const DEFAULT_SERVER_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client.
///
/// Every call is a single request, the decoded response body is returned as is.
pub struct BotApi {
    client: Client,
    token: SecUtf8,
    timeout: Duration,

    /// `{server}/bot{token}/`
    base_url: Url,

    /// `{server}/file/bot{token}/`
    file_url: Url,

    /// Where downloaded uploads are staged before they are sent.
    cache_dir: PathBuf,
}

impl BotApi {
    #[instrument(level = "debug", skip_all)]
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Configuration(
                "required `token` is not supplied".to_string(),
            ));
        }
        let (base_url, file_url) = endpoints(DEFAULT_SERVER_URL, &token)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            token: SecUtf8::from(token),
            timeout,
            base_url,
            file_url,
            cache_dir: std::env::temp_dir().join("rusty-telegram"),
        })
    }

    /// Points the client to another Bot API server, a local one for example.
    pub fn with_server_url(mut self, server_url: &str) -> Result<Self> {
        let (base_url, file_url) = endpoints(server_url, self.token.unsecure())?;
        self.base_url = base_url;
        self.file_url = file_url;
        Ok(self)
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// https://core.telegram.org/bots/api#getme
    #[instrument(level = "info", skip_all)]
    pub async fn get_me(&self) -> Result<Value> {
        self.call("getMe", &methods::GetMe::default()).await
    }

    /// Downloads a file by the `file_path` returned from `getFile`.
    #[instrument(level = "debug", skip_all, fields(file_path = file_path))]
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let url = self.download_url(file_path)?;
        let contents = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        debug!(len = contents.len(), "downloaded");
        Ok(contents.to_vec())
    }

    /// Sends the parameters in the query string of a `GET` request.
    pub async fn call<P>(&self, method_name: &'static str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.call_with_timeout(method_name, params, self.timeout)
            .await
    }

    #[instrument(level = "debug", skip_all, fields(method_name = method_name))]
    pub async fn call_with_timeout<P>(
        &self,
        method_name: &'static str,
        params: &P,
        timeout: Duration,
    ) -> Result<Value>
    where
        P: Serialize + ?Sized + Sync,
    {
        let response = self
            .client
            .get(self.method_url(method_name)?)
            .query(params)
            .timeout(timeout)
            .send()
            .await?;
        decode(response).await
    }

    /// Sends the parameters as a multipart form with the file attached as `field`.
    ///
    /// A file ID needs no upload and goes through [`BotApi::call`] instead.
    #[instrument(level = "debug", skip_all, fields(method_name = method_name, field = field))]
    pub async fn upload<P>(
        &self,
        method_name: &'static str,
        field: &'static str,
        input_file: &InputFile,
        accepts_any_media: bool,
        params: &P,
    ) -> Result<Value>
    where
        P: Serialize + ?Sized + Sync,
    {
        let (part, staged) = match input_file {
            InputFile::FileId(_) => return self.call(method_name, params).await,
            InputFile::Path(path) => (read_local(path)?, None),
            InputFile::Url(url) => {
                let (part, staged) = self.stage(method_name, url, accepts_any_media).await?;
                (part, Some(staged))
            }
        };
        let form = form_fields(params, field)?
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
            .part(field, part);
        let result = self.post_form(method_name, form).await;
        drop(staged);
        result
    }

    async fn post_form(&self, method_name: &'static str, form: Form) -> Result<Value> {
        let response = self
            .client
            .post(self.method_url(method_name)?)
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// Downloads the remote file into the cache directory and makes it a form part.
    async fn stage(
        &self,
        method_name: &'static str,
        url: &Url,
        accepts_any_media: bool,
    ) -> Result<(Part, StagedFile)> {
        debug!(%url, "downloading the upload…");
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let (mut staged, mut file) = StagedFile::create(&self.cache_dir)?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)?;
        }
        drop(file);

        let mime_type = mime::sniff(&read_head(staged.path())?);
        debug!(mime_type, "sniffed the upload");
        match mime::extension(mime_type) {
            Some(extension) => staged.set_extension(extension)?,
            None if accepts_any_media => {}
            None => {
                return Err(Error::UnsupportedMediaType {
                    method: method_name,
                    mime_type: mime_type.to_string(),
                });
            }
        }

        let part = Part::bytes(fs::read(staged.path())?)
            .file_name(staged.file_name())
            .mime_str(mime_type)?;
        Ok((part, staged))
    }

    /// Appends the file path segment by segment, so it never leaves the file endpoint.
    fn download_url(&self, file_path: &str) -> Result<Url> {
        let segments: Vec<&str> = file_path.trim_start_matches('/').split('/').collect();
        if segments.iter().any(|segment| matches!(*segment, "." | "..")) {
            return Err(Error::InvalidArgument(format!(
                "invalid file path `{}`: relative segments are not allowed",
                file_path,
            )));
        }
        let mut url = self.file_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Configuration("the file endpoint cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn method_url(&self, method_name: &str) -> Result<Url> {
        self.base_url
            .join(method_name)
            .map_err(|error| Error::InvalidArgument(format!("invalid method name: {}", error)))
    }
}

/// Builds the method and file endpoints.
fn endpoints(server_url: &str, token: &str) -> Result<(Url, Url)> {
    let server_url = server_url.trim_end_matches('/');
    let parse = |url: String| {
        Url::parse(&url).map_err(|error| {
            Error::Configuration(format!("invalid server URL `{}`: {}", server_url, error))
        })
    };
    Ok((
        parse(format!("{}/bot{}/", server_url, token))?,
        parse(format!("{}/file/bot{}/", server_url, token))?,
    ))
}

async fn decode(response: Response) -> Result<Value> {
    debug!(status = ?response.status(), "received the response");
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn read_local(path: &Path) -> Result<Part> {
    let contents = fs::read(path)?;
    let mime_type = mime::sniff(&contents[..contents.len().min(mime::SNIFF_LEN)]);
    debug!(?path, mime_type, "attaching the local file");
    Ok(Part::bytes(contents)
        .file_name(file_name(path))
        .mime_str(mime_type)?)
}

fn read_head(path: &Path) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(mime::SNIFF_LEN);
    fs::File::open(path)?
        .take(mime::SNIFF_LEN as u64)
        .read_to_end(&mut head)?;
    Ok(head)
}

/// Flattens the parameters into text fields, leaving out the unset ones and the file field.
fn form_fields<P>(params: &P, file_field: &str) -> Result<Vec<(String, String)>>
where
    P: Serialize + ?Sized,
{
    let fields = match serde_json::to_value(params)? {
        Value::Object(fields) => fields,
        value => {
            return Err(Error::InvalidArgument(format!(
                "parameters must be an object, got `{}`",
                value
            )))
        }
    };
    Ok(fields
        .into_iter()
        .filter(|(name, _)| name != file_field)
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(value) => Some((name, value)),
            value => Some((name, value.to_string())),
        })
        .collect())
}
