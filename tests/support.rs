use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Status and body a scripted server returns for the n-th request.
pub type Responder = fn(usize) -> (u16, &'static str);

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl ServerHandle {
    pub fn captured(&self) -> Result<Vec<CapturedRequest>, String> {
        self.captured
            .lock()
            .map(|captured| captured.clone())
            .map_err(|err| format!("capture lock failed: {}", err))
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a scripted HTTP server for tests. Returns the login URL.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_login_server(responder: Responder) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let counter = Arc::new(AtomicUsize::new(0));
    let server_captured = Arc::clone(&captured);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let captured = Arc::clone(&server_captured);
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || handle_client(stream, responder, &counter, &captured));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(2));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/api/users/login", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            captured,
        },
    ))
}

/// Like `spawn_login_server`, but skips the test in sandboxes without sockets.
///
/// # Errors
///
/// Returns an error if the listener fails for any other reason.
pub fn spawn_login_server_or_skip(
    responder: Responder,
) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_login_server(responder) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Returns a URL on a port that nothing listens on.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub fn unreachable_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/api/users/login", addr))
}

fn handle_client(
    mut stream: TcpStream,
    responder: Responder,
    counter: &AtomicUsize,
    captured: &Mutex<Vec<CapturedRequest>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let index = counter.fetch_add(1, Ordering::SeqCst);
    if let Ok(mut captured) = captured.lock() {
        captured.push(request);
    }

    let (status, body) = responder(index);
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];
    loop {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(buffer.get(..read)?);
        let text = String::from_utf8_lossy(&data).into_owned();
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            continue;
        };
        let content_length = header_value(head, "content-length")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);
        if body.len() < content_length {
            continue;
        }
        return Some(CapturedRequest {
            request_line: head.lines().next().unwrap_or_default().to_owned(),
            content_type: header_value(head, "content-type"),
            body: body.to_owned(),
        });
    }
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim().to_owned())
    })
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Run the `ratecheck` binary from `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_ratecheck<I, S>(args: I, cwd: &Path) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = ratecheck_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("RATECHECK_LOG")
        .output()
        .map_err(|err| format!("run ratecheck failed: {}", err))
}

fn ratecheck_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_ratecheck").map_or_else(
        || Err("CARGO_BIN_EXE_ratecheck missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
