use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRecord;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// Random bootstrap password for the seeded admin account.
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Seed the default admin account when the database has none. Teachers
/// self-register, admins do not, so a fresh install needs this one row.
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} admin(s), skipping admin seed", count);
            return;
        }
        Ok(_) => {
            info!("No admin account found, creating the default one...");
        }
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    // Password from the environment when set, otherwise generated and printed
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Email: admin@school.com");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_record = CreateUserRecord {
        email: "admin@school.com".to_string(),
        password_hash,
        name: "Administrator".to_string(),
        role: UserRole::Admin,
    };

    match storage.create_user(admin_record).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// Prepare the server startup context: crypto provider, storage (with
/// migrations) and the seeded admin account.
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    StartupContext { storage }
}
