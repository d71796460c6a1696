#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use promotion_admin::{PromotionClient, PromotionClientConfig};

pub struct Captured {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct Canned {
    pub status: u16,
    pub body: &'static str,
    pub location: Option<&'static str>,
}

pub fn canned(status: u16, body: &'static str) -> Canned {
    Canned {
        status,
        body,
        location: None,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        404 => "Not Found",
        _ => "Error",
    }
}

/// 每个连接只处理一个请求，处理完即关闭
pub fn serve(responses: Vec<Canned>) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for canned in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut headers = Vec::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some(idx) = line.find(':') {
                    let name = line[..idx].trim().to_owned();
                    let value = line[idx + 1..].trim().to_owned();
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.parse().unwrap();
                    }
                    headers.push((name, value));
                }
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();

            tx.send(Captured {
                request_line: request_line.trim_end().to_owned(),
                headers,
                body: String::from_utf8(body).unwrap(),
            })
            .unwrap();

            let mut response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                canned.status,
                reason(canned.status),
                canned.body.len()
            );
            if let Some(location) = canned.location {
                response.push_str(&format!("Location: {}\r\n", location));
            }
            response.push_str("\r\n");
            response.push_str(canned.body);

            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    (base_url, rx)
}

pub fn client(base_url: &str) -> PromotionClient {
    let config = PromotionClientConfig::builder(base_url).build().unwrap();
    PromotionClient::new(config)
}
