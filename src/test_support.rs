//! In-process HTTP server used by unit tests.
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Behavior {
    Respond {
        status: u16,
        body: &'static str,
        delay: Duration,
    },
    /// Announces a longer body than it sends, then closes the connection.
    Truncated {
        status: u16,
        body: &'static str,
        declared_len: usize,
    },
    /// Reads the request and never answers.
    Hang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReceivedRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

pub(crate) struct TestServer {
    pub(crate) base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub(crate) fn received(&self) -> Result<Vec<ReceivedRequest>, String> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .map_err(|err| format!("received lock poisoned: {}", err))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

pub(crate) fn spawn_test_server(behavior: Behavior) -> Result<TestServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_server = Arc::clone(&received);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let received = Arc::clone(&received_server);
                    thread::spawn(move || handle_client(stream, behavior, &received));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        received,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(
    mut stream: TcpStream,
    behavior: Behavior,
    received: &Arc<Mutex<Vec<ReceivedRequest>>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    if let Ok(mut guard) = received.lock() {
        guard.push(request);
    }

    match behavior {
        Behavior::Hang => {
            thread::sleep(Duration::from_secs(3));
        }
        Behavior::Respond {
            status,
            body,
            delay,
        } => {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if write_response(&mut stream, status, body.len(), body).is_err() {
                return;
            }
        }
        Behavior::Truncated {
            status,
            body,
            declared_len,
        } => {
            if write_response(&mut stream, status, declared_len, body).is_err() {
                return;
            }
        }
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn write_response(
    stream: &mut TcpStream,
    status: u16,
    content_length: usize,
    body: &str,
) -> std::io::Result<()> {
    let response = format!(
        "HTTP/1.1 {} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status, content_length, body
    );
    stream.write_all(response.as_bytes())?;
    stream.flush()
}

fn read_request(stream: &mut TcpStream) -> Option<ReceivedRequest> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    };

    let head = String::from_utf8_lossy(buffer.get(..header_end)?).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_owned();
    let path = request_line.next()?.to_owned();

    let mut content_length: usize = 0;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            if name == "content-length" {
                content_length = value.trim().parse().ok()?;
            } else if name == "content-type" {
                content_type = Some(value.trim().to_owned());
            }
        }
    }

    let body_start = header_end.checked_add(4)?;
    let body_end = body_start.checked_add(content_length)?;
    while buffer.len() < body_end {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    }
    let body = String::from_utf8_lossy(buffer.get(body_start..body_end)?).into_owned();

    Some(ReceivedRequest {
        method,
        path,
        content_type,
        body,
    })
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}
