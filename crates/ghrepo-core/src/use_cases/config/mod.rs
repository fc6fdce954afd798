pub mod resolve_github_config;
