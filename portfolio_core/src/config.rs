use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

static DATA_DIR_NAME: &str = "portfolio";
static PORTFOLIO_DB_NAME: &str = "portfolio_db.sqlite";
static CONFIG_FILE_NAME: &str = "config.json";
static MEDIA_DIR_NAME: &str = "media";

// For now this directory structure should be like
// data_dir_path
// |- portfolio
//    |- portfolio_db.sqlite
//    |- config.json
//    |- media
//       |- profile_photos
//       |- resumes
//       |- project_images
//       |- social_icons

/// Logical categories uploaded files are filed under. The data model only
/// ever stores the returned path as an opaque string reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    ProfilePhotos,
    Resumes,
    ProjectImages,
    SocialIcons,
}

impl MediaCategory {
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaCategory::ProfilePhotos => "profile_photos",
            MediaCategory::Resumes => "resumes",
            MediaCategory::ProjectImages => "project_images",
            MediaCategory::SocialIcons => "social_icons",
        }
    }

    fn all() -> [MediaCategory; 4] {
        [
            MediaCategory::ProfilePhotos,
            MediaCategory::Resumes,
            MediaCategory::ProjectImages,
            MediaCategory::SocialIcons,
        ]
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PortfolioConfig {
    pub(crate) database_path: PathBuf,

    /// Root directory for uploaded media, split into one subdirectory per
    /// [`MediaCategory`].
    pub(crate) media_dir: PathBuf,
}

impl PortfolioConfig {
    fn new(data_dir: PathBuf) -> Self {
        let database_path = data_dir.join(PORTFOLIO_DB_NAME);
        let media_dir = data_dir.join(MEDIA_DIR_NAME);

        PortfolioConfig {
            database_path,
            media_dir,
        }
    }

    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }

    /// Directory a file of the given category should be stored under.
    pub fn media_path(&self, category: MediaCategory) -> PathBuf {
        self.media_dir.join(category.dir_name())
    }
}

/// Gets the existing config or initializes a new one if it doesn't exist
pub async fn get_or_init() -> Result<PortfolioConfig, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_dir().expect("failed to find a data directory on this platform");

    let portfolio_dir = data_dir.join(DATA_DIR_NAME);
    let config_path = portfolio_dir.join(CONFIG_FILE_NAME);

    // Create the portfolio directory if it doesn't exist
    fs::create_dir_all(&portfolio_dir).await?;

    let config = if config_path.exists() {
        // Read and deserialize existing config
        let mut file = fs::File::open(&config_path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        let config: PortfolioConfig = serde_json::from_str(&contents)?;
        config
    } else {
        // Create new config
        let config = PortfolioConfig::new(portfolio_dir.clone());

        // Serialize and write to file
        let json = serde_json::to_string_pretty(&config)?;
        let mut file = fs::File::create(&config_path).await?;
        file.write_all(json.as_bytes()).await?;

        config
    };

    // Media category directories must exist before the first upload lands
    for category in MediaCategory::all() {
        fs::create_dir_all(config.media_path(category)).await?;
    }

    Ok(config)
}
