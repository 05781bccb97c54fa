//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "OBLINK_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 아무 파일도 없으면 기본값(연동 비활성)으로 동작한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/oblink/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("oblink").join("config.json"));
    }

    paths.push(PathBuf::from(".oblink/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("oblink-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn merges_existing_files_in_order_and_skips_missing() {
        let dir = scratch_dir("loader-merge");
        let low = dir.join("low.json");
        let high = dir.join("high.json");
        fs::write(
            &low,
            r#"{ "ob": { "enabled": true, "kc_user": "kc", "bridge_uuid": "old" } }"#,
        )
        .unwrap();
        fs::write(&high, r#"{ "ob": { "bridge_uuid": "new" } }"#).unwrap();

        let loaded =
            load_from_paths(vec![low.clone(), dir.join("missing.json"), high.clone()]).unwrap();

        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.searched_paths.len(), 3);
        assert!(loaded.config.ob.is_enabled());
        assert_eq!(loaded.config.ob.kc_user.as_deref(), Some("kc"));
        assert_eq!(loaded.config.ob.bridge_uuid.as_deref(), Some("new"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = scratch_dir("loader-invalid");
        let bad = dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        let err = load_from_paths(vec![bad.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn dedups_paths_keeping_first_position() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
