//! End-to-end tests driving `FtpClient` against an in-process mock server.
//!
//! Each test spins up a bare `TcpListener`, scripts the exact reply sequence
//! a real server would send for one scenario, and asserts both the client's
//! return value and the exact commands it sent.

use ftp_rs::{ConnectionConfig, EntryKind, FtpClient, FtpError};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// One step of a scripted server conversation.
enum Step {
    /// Write `text` followed by CRLF to the control socket.
    Send(String),
    /// Read one line from the control socket and record it (trimmed).
    Recv,
    /// Accept a single connection on the data listener, write `bytes`, then
    /// close it.
    OpenData(Vec<u8>),
}

fn send(text: impl Into<String>) -> Step {
    Step::Send(text.into())
}

async fn serve(
    control: TcpStream,
    script: Vec<Step>,
    received: Arc<Mutex<Vec<String>>>,
    mut data_listener: Option<TcpListener>,
) {
    let mut control = BufReader::new(control);
    for step in script {
        match step {
            Step::Send(text) => {
                let line = format!("{text}\r\n");
                control
                    .get_mut()
                    .write_all(line.as_bytes())
                    .await
                    .expect("mock server write failed");
            }
            Step::Recv => {
                let mut line = String::new();
                control
                    .read_line(&mut line)
                    .await
                    .expect("mock server read failed");
                received
                    .lock()
                    .unwrap()
                    .push(line.trim_end_matches(['\r', '\n']).to_string());
            }
            Step::OpenData(bytes) => {
                let listener = data_listener
                    .take()
                    .expect("scenario has no data listener configured");
                let (mut sock, _) = listener.accept().await.expect("data accept failed");
                sock.write_all(&bytes).await.expect("data write failed");
                sock.shutdown().await.expect("data shutdown failed");
            }
        }
    }
}

/// Start a mock control-channel server and return the config to dial it.
async fn start_mock(script: Vec<Step>, data_listener: Option<TcpListener>) -> (ConnectionConfig, Arc<Mutex<Vec<String>>>) {
    let control_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = control_listener.local_addr().unwrap().port();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_for_task = received.clone();

    tokio::spawn(async move {
        let (sock, _) = control_listener.accept().await.unwrap();
        serve(sock, script, received_for_task, data_listener).await;
    });

    let config = ConnectionConfig::anonymous("127.0.0.1")
        .timeout_ms(2_000)
        .keepalive_ms(2_000);
    let config = ConnectionConfig { port, ..config };
    (config, received)
}

// 1. Connect & negotiate: full FEAT handshake, all features advertised.
#[tokio::test]
async fn connect_and_negotiate_all_features() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // USER
        send("331 need password"),
        Step::Recv, // PASS
        send("230 logged in"),
        Step::Recv, // FEAT
        send("211-Features:"),
        send(" MDTM"),
        send(" SIZE"),
        send(" MLST type*;size*;modify*;"),
        send(" MLSD"),
        send(" UTF8"),
        send(" MFMT"),
        send(" EPSV"),
        send("211 End"),
        Step::Recv, // OPTS UTF8 ON
        send("202 UTF8 set to on"),
        Step::Recv, // TYPE I
        send("200 Type set to I"),
    ];
    let (config, received) = start_mock(script, None).await;

    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();

    assert!(client.is_authenticated());
    let features = client.get_features();
    assert!(features.mdtm && features.size && features.mlst && features.mlsd);
    assert!(features.utf8 && features.mfmt && features.epsv);

    let commands = received.lock().unwrap().clone();
    assert_eq!(
        commands,
        vec!["USER anonymous", "PASS anonymous", "FEAT", "OPTS UTF8 ON", "TYPE I"]
    );
}

// 2. Auth failure: USER/PASS only, 530 maps to Auth.
#[tokio::test]
async fn login_auth_failure() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // USER
        send("331 need password"),
        Step::Recv, // PASS
        send("530 invalid credentials"),
    ];
    let (config, received) = start_mock(script, None).await;

    let mut client = FtpClient::connect(config).await.unwrap();
    let err = client.login().await.unwrap_err();
    assert!(matches!(err, FtpError::Auth(_)));
    assert!(!client.is_authenticated());

    let commands = received.lock().unwrap().clone();
    assert_eq!(commands, vec!["USER anonymous", "PASS anonymous"]);
}

// 3. directory_exists: true case.
#[tokio::test]
async fn directory_exists_true() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // PWD
        send("257 \"/\" is current directory"),
        Step::Recv, // CWD /pub
        send("250 directory changed"),
        Step::Recv, // CWD / (restore)
        send("250 directory changed"),
    ];
    let (config, received) = start_mock(script, None).await;

    let mut client = FtpClient::connect(config).await.unwrap();
    let exists = client.directory_exists("/pub").await.unwrap();
    assert!(exists);

    let commands = received.lock().unwrap().clone();
    assert_eq!(commands, vec!["PWD", "CWD /pub", "CWD /"]);
}

// 3. directory_exists: false case, current directory still restored.
#[tokio::test]
async fn directory_exists_false_restores_cwd() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // PWD
        send("257 \"/\" is current directory"),
        Step::Recv, // CWD /missing
        send("550 No such directory"),
        Step::Recv, // CWD / (restore)
        send("250 directory changed"),
    ];
    let (config, received) = start_mock(script, None).await;

    let mut client = FtpClient::connect(config).await.unwrap();
    let exists = client.directory_exists("/missing").await.unwrap();
    assert!(!exists);

    let commands = received.lock().unwrap().clone();
    assert_eq!(commands, vec!["PWD", "CWD /missing", "CWD /"]);
}

/// Login steps that advertise `SIZE` and `MDTM` in `FEAT`, needed before
/// `get_file_size`/`get_last_modification_time` will issue their commands.
fn login_with_size_and_mdtm_steps() -> Vec<Step> {
    vec![
        Step::Recv, // USER
        send("230 logged in"),
        Step::Recv, // FEAT
        send("211-Features:"),
        send(" SIZE"),
        send(" MDTM"),
        send("211 End"),
        Step::Recv, // TYPE I
        send("200 Type set to I"),
    ]
}

// 4. get_file_size / file_exists: present, absent, and protocol-error cases.
#[tokio::test]
async fn file_size_present() {
    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_size_and_mdtm_steps());
    script.extend(vec![Step::Recv, send("213 123")]); // SIZE
    let (config, _received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();
    assert_eq!(client.get_file_size("/pub/file.txt").await.unwrap(), 123);
}

#[tokio::test]
async fn file_exists_absent_maps_to_false_not_error() {
    // file_exists never feature-gates, so it works even before login.
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // SIZE
        send("550 No such file"),
    ];
    let (config, _received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    assert!(!client.file_exists("/pub/missing.txt").await.unwrap());
}

#[tokio::test]
async fn file_size_protocol_error() {
    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_size_and_mdtm_steps());
    script.extend(vec![Step::Recv, send("500 Syntax error")]); // SIZE
    let (config, _received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();
    let err = client.get_file_size("/pub/file.txt").await.unwrap_err();
    assert!(matches!(err, FtpError::Protocol { code: 500, .. }));
}

#[tokio::test]
async fn file_size_zero_is_not_an_error() {
    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_size_and_mdtm_steps());
    script.extend(vec![Step::Recv, send("213 0")]); // SIZE
    let (config, _received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();
    assert_eq!(client.get_file_size("/pub/empty.txt").await.unwrap(), 0);
}

// 5. MDTM parse.
#[tokio::test]
async fn mdtm_parses_utc_timestamp() {
    use chrono::{Datelike, Timelike};

    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_size_and_mdtm_steps());
    script.extend(vec![Step::Recv, send("213 20180608233854")]); // MDTM
    let (config, _received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();
    let modified = client
        .get_last_modification_time("/pub/file.txt")
        .await
        .unwrap();

    assert_eq!(modified.year(), 2018);
    assert_eq!(modified.month(), 6);
    assert_eq!(modified.day(), 8);
    assert_eq!(modified.hour(), 23);
    assert_eq!(modified.minute(), 38);
    assert_eq!(modified.second(), 54);
}

/// Login steps that advertise `MLSD` in `FEAT`, so that `list()` picks MLSD
/// over LIST. Shared by the listing scenarios below.
fn login_with_mlsd_steps() -> Vec<Step> {
    vec![
        Step::Recv, // USER
        send("230 logged in"),
        Step::Recv, // FEAT
        send("211-Features:"),
        send(" MLSD"),
        send("211 End"),
        Step::Recv, // TYPE I
        send("200 Type set to I"),
    ]
}

// 6. MLSD listing, served over a real passive-mode data connection.
#[tokio::test]
async fn mlsd_listing_splits_files_and_directories() {
    let data_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let data_port = data_listener.local_addr().unwrap().port();

    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_mlsd_steps());
    script.extend(vec![
        Step::Recv, // EPSV
        send(format!(
            "229 Entering Extended Passive Mode (|||{data_port}|)"
        )),
        Step::OpenData(b"type=file;size=5; a.txt\r\ntype=dir;modify=20180702203936; sub\r\n".to_vec()),
        Step::Recv, // MLSD
        send("150 Opening data connection"),
        send("226 Transfer complete"),
    ]);
    let (config, received) = start_mock(script, Some(data_listener)).await;

    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();
    let entries = client.list(None).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "a.txt");
    assert_eq!(entries[0].size, Some(5));
    assert_eq!(entries[1].name, "sub");
    assert_eq!(entries[1].kind, EntryKind::Dir);

    let commands = received.lock().unwrap().clone();
    assert_eq!(
        commands,
        vec!["USER anonymous", "FEAT", "TYPE I", "EPSV", "MLSD"]
    );
}

#[tokio::test]
async fn get_files_and_get_directories_filter_by_kind() {
    let data_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let data_port = data_listener.local_addr().unwrap().port();

    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_mlsd_steps());
    script.extend(vec![
        Step::Recv, // EPSV
        send(format!(
            "229 Entering Extended Passive Mode (|||{data_port}|)"
        )),
        Step::OpenData(b"type=file;size=1; one.txt\r\ntype=dir; sub\r\ntype=file;size=2; two.txt\r\n".to_vec()),
        Step::Recv, // MLSD
        send("150 Opening data connection"),
        send("226 Transfer complete"),
    ]);
    let (config, _received) = start_mock(script, Some(data_listener)).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();

    let files = client.get_files(None).await.unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.kind == EntryKind::File));
}

#[tokio::test]
async fn empty_listing_returns_empty_entries() {
    let data_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let data_port = data_listener.local_addr().unwrap().port();

    let mut script = vec![send("220 mock ftp ready")];
    script.extend(login_with_mlsd_steps());
    script.extend(vec![
        Step::Recv, // EPSV
        send(format!(
            "229 Entering Extended Passive Mode (|||{data_port}|)"
        )),
        Step::OpenData(Vec::new()),
        Step::Recv, // MLSD
        send("150 Opening data connection"),
        send("226 Transfer complete"),
    ]);
    let (config, _received) = start_mock(script, Some(data_listener)).await;
    let mut client = FtpClient::connect(config).await.unwrap();
    client.login().await.unwrap();

    let entries = client.list(None).await.unwrap();
    assert!(entries.is_empty());
}

// 7. Recursive MKD for /a/b/c when only /a exists.
#[tokio::test]
async fn create_dir_recursive_creates_missing_segments() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // CWD /
        send("250 directory changed"),
        Step::Recv, // CWD /a
        send("250 directory changed"),
        Step::Recv, // CWD /a/b
        send("550 No such directory"),
        Step::Recv, // MKD b
        send("257 \"/a/b\" created"),
        Step::Recv, // CWD /a/b
        send("250 directory changed"),
        Step::Recv, // CWD /a/b/c
        send("550 No such directory"),
        Step::Recv, // MKD c
        send("257 \"/a/b/c\" created"),
        Step::Recv, // CWD /a/b/c
        send("250 directory changed"),
    ];
    let (config, received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();

    client.create_dir("/a/b/c", true).await.unwrap();

    let commands = received.lock().unwrap().clone();
    assert_eq!(
        commands,
        vec![
            "CWD /",
            "CWD /a",
            "CWD /a/b",
            "MKD b",
            "CWD /a/b",
            "CWD /a/b/c",
            "MKD c",
            "CWD /a/b/c",
        ]
    );
}

// 8. Rename a file that doesn't exist: RNFR fails, RNTO is never sent.
#[tokio::test]
async fn rename_missing_file_never_sends_rnto() {
    let script = vec![
        send("220 mock ftp ready"),
        Step::Recv, // RNFR
        send("550 No such file"),
    ];
    let (config, received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();

    let err = client.rename("missing.txt", "new.txt").await.unwrap_err();
    assert!(matches!(err, FtpError::NotFound(_)));

    let commands = received.lock().unwrap().clone();
    assert_eq!(commands, vec!["RNFR missing.txt"]);
}

#[tokio::test]
async fn rename_empty_operand_rejected_without_touching_socket() {
    let script = vec![send("220 mock ftp ready")];
    let (config, received) = start_mock(script, None).await;
    let mut client = FtpClient::connect(config).await.unwrap();

    let err = client.rename("", "new.txt").await.unwrap_err();
    assert!(matches!(err, FtpError::Argument(_)));
    assert!(received.lock().unwrap().is_empty());
}

// Greeting below 2xx fails connect() before login is ever attempted.
#[tokio::test]
async fn connect_rejects_non_220_greeting() {
    let script = vec![send("421 Service not available")];
    let (config, _received) = start_mock(script, None).await;

    let err = FtpClient::connect(config).await.unwrap_err();
    assert!(matches!(err, FtpError::Protocol { code: 421, .. }));
}
