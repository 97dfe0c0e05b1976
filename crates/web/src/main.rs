use serde::Serialize;
use std::io::Read;
use tiny_http::{Header, Method, Response, Server, StatusCode};
use ventuno_advisor::{advise, AdvisorConfig, AdvisorError};
use ventuno_core::Hand;

fn main() {
    let server = Server::http("0.0.0.0:5000").expect("start server");
    println!("Ventuno advisor on http://localhost:5000");
    let config = AdvisorConfig::default();
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, &config) {
            eprintln!("request error: {err}");
        }
    }
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

fn handle_request(
    mut request: tiny_http::Request,
    config: &AdvisorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let method = request.method().clone();
    let url = request.url().to_string();
    match (method, url.as_str()) {
        // CORS preflight on any path.
        (Method::Options, _) => respond_preflight(request),
        (Method::Post, "/recommend") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let hand: Hand = match serde_json::from_str(&body) {
                Ok(hand) => hand,
                Err(err) => {
                    return respond_error(request, 400, format!("invalid request body: {err}"));
                }
            };
            match advise(&hand, config) {
                Ok(advice) => respond_json(request, &advice),
                Err(AdvisorError::InvalidHand(message)) => respond_error(request, 400, message),
                Err(err) => respond_error(request, 500, err.to_string()),
            }
        }
        _ => {
            let response = Response::empty(StatusCode(404)).with_header(cors_header()?);
            request.respond(response)?;
            Ok(())
        }
    }
}

fn header(name: &[u8], value: &[u8]) -> Result<Header, Box<dyn std::error::Error>> {
    Header::from_bytes(name, value).map_err(|()| "invalid header".into())
}

fn cors_header() -> Result<Header, Box<dyn std::error::Error>> {
    header(b"Access-Control-Allow-Origin", b"*")
}

fn respond_preflight(request: tiny_http::Request) -> Result<(), Box<dyn std::error::Error>> {
    let response = Response::empty(StatusCode(204))
        .with_header(cors_header()?)
        .with_header(header(
            b"Access-Control-Allow-Methods",
            b"POST, OPTIONS",
        )?)
        .with_header(header(b"Access-Control-Allow-Headers", b"Content-Type")?);
    request.respond(response)?;
    Ok(())
}

fn respond_json<T: Serialize>(
    request: tiny_http::Request,
    payload: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(payload)?;
    let response = Response::from_data(body)
        .with_header(header(b"Content-Type", b"application/json")?)
        .with_header(cors_header()?);
    request.respond(response)?;
    Ok(())
}

fn respond_error(
    request: tiny_http::Request,
    status: u16,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&ApiError { error: message })?;
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header(b"Content-Type", b"application/json")?)
        .with_header(cors_header()?);
    request.respond(response)?;
    Ok(())
}
