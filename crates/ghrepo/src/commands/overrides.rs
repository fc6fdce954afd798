use clap::Args;
use ghrepo_models::GithubConfigOverrides;

/// Explicit GitHub configuration values.
#[derive(Args, Debug, Default)]
pub(crate) struct GithubConfigArgs {
    /// GitHub account or organization (defaults to `GHREPO_GITHUB_USER`)
    #[arg(long)]
    user: Option<String>,
    /// Repository name (defaults to the project name)
    #[arg(long)]
    repository: Option<String>,
    /// URL of the project web site
    #[arg(long)]
    website_url: Option<String>,
    /// URL of the issue tracker
    #[arg(long)]
    issue_tracker_url: Option<String>,
    /// Read-only repository connection
    #[arg(long)]
    connection: Option<String>,
    /// Developer repository connection
    #[arg(long)]
    developer_connection: Option<String>,
    /// URL of the account profile
    #[arg(long)]
    profile_url: Option<String>,
}

impl From<GithubConfigArgs> for GithubConfigOverrides {
    fn from(args: GithubConfigArgs) -> Self {
        Self {
            user: args.user,
            repository: args.repository,
            website_url: args.website_url,
            issue_tracker_url: args.issue_tracker_url,
            connection: args.connection,
            developer_connection: args.developer_connection,
            profile_url: args.profile_url,
        }
    }
}
