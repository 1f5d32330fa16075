use crate::model::page::Material;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Portal origin, e.g. http://localhost:5000
    pub base_url: String,
    pub nim: String,
    pub nama: String,
    pub email: String,
    /// Session cookie value; empty means anonymous
    #[serde(default)]
    pub session_token: String,
    /// Where downloaded transcripts are saved
    pub download_dir: String,
    /// Material roster shown on the Materi page
    #[serde(default = "default_materials")]
    pub materials: Vec<Material>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            nim: "220010001".to_string(),
            nama: "Mahasiswa".to_string(),
            email: "mahasiswa@student.kampus.ac.id".to_string(),
            session_token: String::new(),
            download_dir: default_download_dir(),
            materials: default_materials(),
        }
    }
}

fn default_download_dir() -> String {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home)
            .join("Downloads")
            .to_string_lossy()
            .to_string(),
        Err(_) => ".".to_string(),
    }
}

fn default_materials() -> Vec<Material> {
    vec![
        Material {
            id: 42,
            judul: "Materi Dasar Pemrograman Web".to_string(),
            minggu: 1,
        },
        Material {
            id: 43,
            judul: "Praktikum Pemrograman Web Minggu 1".to_string(),
            minggu: 1,
        },
        Material {
            id: 44,
            judul: "Materi Lanjutan Pemrograman Web".to_string(),
            minggu: 2,
        },
        Material {
            id: 51,
            judul: "Materi Dasar Basis Data".to_string(),
            minggu: 1,
        },
        Material {
            id: 52,
            judul: "Materi Lanjutan Basis Data".to_string(),
            minggu: 2,
        },
    ]
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".siakad-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute URL for a portal path, built from the configured origin
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn session_token_opt(&self) -> Option<String> {
        if self.session_token.is_empty() {
            None
        } else {
            Some(self.session_token.clone())
        }
    }
}
