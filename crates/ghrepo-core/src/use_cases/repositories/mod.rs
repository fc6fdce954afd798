pub mod configure_github_repository;
