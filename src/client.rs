//! HTTP client for the puzzle site.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, REFERER, USER_AGENT};
use tracing::{debug, error};

use crate::auth::Credentials;
use crate::config::Workspace;
use crate::error::{AocError, Result};
use crate::html::{self, SubmissionReport};
use crate::puzzle::{Day, Part};

/// Default user agent. A `User-Agent` in the headers file overrides it.
const USER_AGENT_VALUE: &str = concat!("aoc/", env!("CARGO_PKG_VERSION"));

/// Client bound to one event year.
#[derive(Debug, Clone)]
pub struct AocClient {
    client: Client,
    base_url: String,
    year: i32,
    credentials: Credentials,
}

impl AocClient {
    pub fn new(base_url: &str, year: i32, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
            credentials,
        })
    }

    /// Build a client from the workspace's config and credential files.
    pub fn from_workspace(workspace: &Workspace) -> Result<Self> {
        let config = workspace.config();
        Self::new(
            &config.base_url,
            workspace.year()?,
            Credentials::load(workspace)?,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn day_url(&self, day: Day) -> String {
        format!("{}/{}/day/{}", self.base_url, self.year, day)
    }

    /// Attach cookie, referer and configured headers.
    fn authorize(&self, request: RequestBuilder, day: Day) -> RequestBuilder {
        let mut request = request.header(REFERER, self.day_url(day));
        for (name, value) in &self.credentials.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request.header(COOKIE, self.credentials.cookie())
    }

    fn check(response: Response, url: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(AocError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    /// Download the personal puzzle input, verbatim.
    pub fn fetch_input(&self, day: Day) -> Result<String> {
        let url = format!("{}/input", self.day_url(day));
        debug!(url = %url, "fetching puzzle input");

        let response = self.authorize(self.client.get(&url), day).send()?;
        Ok(Self::check(response, &url)?.text()?)
    }

    /// Download the puzzle page and pull out the example for `part`.
    ///
    /// A failed status is logged and yields `None`, as does a page without
    /// enough example blocks.
    pub fn fetch_example(&self, day: Day, part: Part) -> Result<Option<String>> {
        let url = self.day_url(day);
        debug!(url = %url, part = part.get(), "fetching puzzle page");

        let response = self.authorize(self.client.get(&url), day).send()?;
        if !response.status().is_success() {
            error!("Error: {}", response.status().as_u16());
            return Ok(None);
        }
        let page = response.text()?;
        Ok(html::example_for_part(&page, part.get()))
    }

    /// Post an answer and parse the site's verdict.
    pub fn submit(&self, day: Day, part: Part, answer: &str) -> Result<SubmissionReport> {
        let url = format!("{}/answer", self.day_url(day));
        debug!(url = %url, part = part.get(), answer, "submitting answer");

        let body = submission_form(part, answer)?;
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        let response = self.authorize(request, day).send()?;
        let page = Self::check(response, &url)?.text()?;
        html::parse_submission(&page)
    }
}

/// Form body for an answer post: `level=<part>&answer=<answer>`.
pub fn submission_form(part: Part, answer: &str) -> Result<String> {
    serde_urlencoded::to_string([("level", part.get().to_string().as_str()), ("answer", answer)])
        .map_err(|e| AocError::Response {
            message: format!("could not encode answer: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Read;
    use std::sync::mpsc;
    use std::thread;

    /// What the mock site saw for one request.
    #[derive(Debug)]
    struct Seen {
        method: String,
        url: String,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl Seen {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    /// Serve exactly one request with the given status and body.
    fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<Seen>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", server.server_addr().to_ip().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body_in = String::new();
            request.as_reader().read_to_string(&mut body_in).unwrap();
            let seen = Seen {
                method: request.method().to_string(),
                url: request.url().to_string(),
                headers: request
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string(), h.value.to_string()))
                    .collect(),
                body: body_in,
            };
            tx.send(seen).unwrap();
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();
        });
        (addr, rx)
    }

    fn client(base: &str) -> AocClient {
        let mut headers = BTreeMap::new();
        headers.insert("X-Contact".to_string(), "me@example.com".to_string());
        let creds = Credentials {
            session: "s3cr3t".into(),
            headers,
        };
        AocClient::new(base, 2024, creds, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_fetch_input_sends_cookie_and_referer() {
        let (base, rx) = serve_once(200, "1\n2\n3\n");
        let day = Day::new(3).unwrap();
        let text = client(&base).fetch_input(day).unwrap();
        assert_eq!(text, "1\n2\n3\n");

        let seen = rx.recv().unwrap();
        assert_eq!(seen.method, "GET");
        assert_eq!(seen.url, "/2024/day/3/input");
        assert_eq!(seen.header("Cookie"), Some("session=s3cr3t"));
        assert_eq!(seen.header("Referer"), Some(format!("{}/2024/day/3", base).as_str()));
        assert_eq!(seen.header("X-Contact"), Some("me@example.com"));
        assert_eq!(seen.header("User-Agent"), Some(USER_AGENT_VALUE));
    }

    #[test]
    fn test_fetch_input_status_error() {
        let (base, _rx) = serve_once(400, "Puzzle inputs differ by user.");
        let err = client(&base).fetch_input(Day::new(1).unwrap()).unwrap_err();
        assert!(matches!(err, AocError::Status { status: 400, .. }));
    }

    #[test]
    fn test_fetch_example() {
        let (base, rx) = serve_once(200, "<pre><code>a\nb\n</code></pre><pre><code>c\nd\n</code></pre>");
        let example = client(&base)
            .fetch_example(Day::new(9).unwrap(), Part::Two)
            .unwrap();
        assert_eq!(example.as_deref(), Some("c\nd\n"));
        assert_eq!(rx.recv().unwrap().url, "/2024/day/9");
    }

    #[test]
    fn test_fetch_example_failed_status_is_none() {
        let (base, _rx) = serve_once(404, "not yet");
        let example = client(&base)
            .fetch_example(Day::new(25).unwrap(), Part::One)
            .unwrap();
        assert!(example.is_none());
    }

    #[test]
    fn test_submit_posts_form() {
        let (base, rx) = serve_once(
            200,
            "<article><p>That's the right answer!  You are one gold star closer.</p></article>",
        );
        let report = client(&base)
            .submit(Day::new(1).unwrap(), Part::Two, "1234")
            .unwrap();
        assert_eq!(report.verdict, html::Verdict::Correct);

        let seen = rx.recv().unwrap();
        assert_eq!(seen.method, "POST");
        assert_eq!(seen.url, "/2024/day/1/answer");
        assert_eq!(seen.body, "level=2&answer=1234");
        assert_eq!(
            seen.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_submission_form_escapes() {
        assert_eq!(
            submission_form(Part::One, "a b&c").unwrap(),
            "level=1&answer=a+b%26c"
        );
    }
}
