#[cfg(test)]
pub mod test_utils {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::{
        Router,
        extract::State,
        http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
        routing::post,
    };
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// A request as seen by the fake prediction service.
    #[derive(Debug, Clone)]
    pub struct ReceivedRequest {
        pub content_type: Option<String>,
        pub body: String,
    }

    /// Stand-in for the prediction service: answers every `POST /predict`
    /// with a fixed status and body and remembers what it received.
    #[derive(Clone)]
    pub struct FakePredictor {
        status: StatusCode,
        body: String,
        received: Arc<Mutex<Vec<ReceivedRequest>>>,
    }

    impl FakePredictor {
        pub fn new(status: StatusCode, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.received.lock().unwrap().clone()
        }

        /// Serve on an ephemeral local port, returning the endpoint URL.
        pub async fn spawn(&self) -> String {
            let app = Router::new()
                .route("/predict", post(predict))
                .with_state(self.clone());

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind fake predictor");
            let addr = listener.local_addr().expect("Listener has no address");
            tokio::spawn(async move {
                axum::serve(listener, app).await.expect("Fake predictor failed");
            });

            format!("http://{}/predict", addr)
        }
    }

    async fn predict(
        State(fake): State<FakePredictor>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, String) {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.received
            .lock()
            .unwrap()
            .push(ReceivedRequest { content_type, body });
        (fake.status, fake.body.clone())
    }

    /// An endpoint on which nothing is listening.
    pub async fn closed_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr: SocketAddr = listener.local_addr().expect("Listener has no address");
        drop(listener);
        format!("http://{}/predict", addr)
    }

    /// Readings from a typical polluted afternoon, in wire order.
    pub fn sample_readings() -> Vec<(common::Pollutant, String)> {
        let values = [
            "110", "150", "25", "40", "65", "20", "1.5", "12", "5", "1.2", "2.5", "0.3",
        ];
        common::Pollutant::ALL
            .iter()
            .zip(values)
            .map(|(p, v)| (*p, v.to_string()))
            .collect()
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
