use domain::{Post, PostId};
use draft::DraftStore;
use form::{CommentForm, FormStatus};

const BASE_URL: &str = "http://127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    println!("Starting inkpress test client...");

    let profile_dir =
        std::env::var("INKPRESS_PROFILE_DIR").unwrap_or_else(|_| "data/profile".to_string());
    let store = DraftStore::open(&profile_dir)?;

    println!("\n[1/4] Fetching posts...");
    let posts_url = format!("{}/api/posts", BASE_URL);
    let posts: Vec<Post> = client.get(&posts_url).send().await?.json().await?;
    println!("   -> Retrieved {} post(s)", posts.len());

    let post_id = match posts.first() {
        Some(p) => {
            println!("   -> Commenting on: {}", p.title);
            PostId::new_unchecked(p.id.clone())
        }
        None => {
            println!("   -> No posts available, nothing to comment on.");
            return Ok(());
        }
    };

    println!("\n[2/4] Filling the form (draft saved per edit)...");
    let mut form = CommentForm::new(BASE_URL, store);
    form.set_name("Ferris");
    form.set_email("ferris@example.com");
    form.set_comment("This is a message from the inkpress test client!");

    println!("\n[3/4] Submitting comment...");
    match form.submit(&post_id).await {
        Ok(()) => {
            println!("   -> ✅ Sent successfully!");
            if let FormStatus::Sent(msg) = form.status() {
                println!("   -> {}", msg);
            }
        }
        Err(e) => {
            println!("   -> ❌ Failed to send: {}", e);
            return Ok(());
        }
    }

    println!("\n[4/4] Fetching posts again to show the comment...");
    let posts: Vec<Post> = client.get(&posts_url).send().await?.json().await?;

    if let Some(p) = posts.iter().find(|p| p.id == post_id.as_str()) {
        println!("   -> {} comment(s) on \"{}\":", p.comments.len(), p.title);
        for c in &p.comments {
            println!("      - [{}] {}: {}", c.created_at, c.name, c.comment);
        }
    }

    Ok(())
}
