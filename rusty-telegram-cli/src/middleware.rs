use poem::error::{MethodNotAllowedError, NotFoundError, ReadBodyError};
use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use tracing::{error, info};

/// Logs the failed requests and turns the errors into bare status codes.
pub struct TracingMiddleware;

impl<E: Endpoint> Middleware<E> for TracingMiddleware {
    type Output = TracingMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        TracingMiddlewareImpl { ep }
    }
}

pub struct TracingMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for TracingMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let status = match self.ep.call(request).await {
            Ok(output) => return Ok(output.into_response()),
            Err(error) if error.is::<NotFoundError>() => {
                info!(?method, path = path.as_str(), "{:#}", error);
                StatusCode::NOT_FOUND
            }
            Err(error) if error.is::<MethodNotAllowedError>() => {
                info!(?method, path = path.as_str(), "{:#}", error);
                StatusCode::METHOD_NOT_ALLOWED
            }
            Err(error) if error.is::<ReadBodyError>() => {
                info!(?method, path = path.as_str(), "{:#}", error);
                StatusCode::BAD_REQUEST
            }
            Err(error) => {
                error!(?method, path = path.as_str(), "{:#}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Ok(status.into_response())
    }
}
