use assert_cmd::Command;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

/// 一時ディレクトリに作成したアプリケーションディレクトリ
pub struct TestCatalog {
    pub root: TempDir,
}

impl TestCatalog {
    pub fn new() -> Self {
        let catalog = Self::uninitialized();
        fs::create_dir(catalog.root.path().join("tools")).unwrap();
        catalog
    }

    /// tools/ をまだ持たないアプリケーションディレクトリ（初回起動）
    #[allow(dead_code)]
    pub fn uninitialized() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// 標準的なツール群を登録したカタログ
    pub fn with_default_tools() -> Self {
        let catalog = Self::new();
        catalog.write_tool("nmap", "apt-get install -y nmap", "recon", None);
        catalog.write_tool("amass", "apt-get install -y amass", "recon", None);
        catalog.write_tool(
            "sqlmap",
            "pip install sqlmap",
            "web",
            Some("Automatic SQL injection tool"),
        );
        catalog
    }

    pub fn write_tool(&self, name: &str, command: &str, category: &str, comment: Option<&str>) {
        let mut content = format!(
            "[default]\nname = {}\ncommand = {}\ncategory = {}\n",
            name, command, category
        );
        if let Some(comment) = comment {
            content.push_str(&format!("comment = {}\n", comment));
        }
        self.write_tool_file(&format!("{}.ini", name), &content);
    }

    pub fn write_tool_file(&self, file: &str, content: &str) {
        fs::write(self.root.path().join("tools").join(file), content).unwrap();
    }

    pub fn write_template(&self, content: &str) {
        fs::write(self.root.path().join("Dockerfile.template"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// DOIG_PATH をこのカタログに向けたコマンド
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("doig").unwrap();
        cmd.env("DOIG_PATH", self.root.path())
            .env("NO_COLOR", "1")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env_remove("DOIG_TOOLS_URL")
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy");
        cmd
    }
}

/// GitHubのアーカイブと同じ形（最上位ディレクトリ付き）のカタログzip
#[allow(dead_code)]
pub fn catalog_archive() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .add_directory("doig-tools-master/", FileOptions::default())
        .unwrap();
    writer
        .add_directory("doig-tools-master/tools/", FileOptions::default())
        .unwrap();

    let files = [
        ("doig-tools-master/README.md", "# doig tools\n"),
        (
            "doig-tools-master/tools/nmap.ini",
            "[default]\nname = nmap\ncommand = apt-get install -y nmap\ncategory = recon\n",
        ),
        (
            "doig-tools-master/tools/web/sqlmap.ini",
            "[default]\nname = sqlmap\ncommand = pip install sqlmap\ncategory = web\n",
        ),
    ];
    for (name, content) in files {
        writer.start_file(name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// 固定のレスポンスを返すHTTPサーバーを起動し、そのURLを返す
#[allow(dead_code)]
pub fn serve_archive(status: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            // リクエストヘッダーを読み捨てる
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{}/archive/refs/heads/master.zip", addr)
}
