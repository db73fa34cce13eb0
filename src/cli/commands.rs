//! Command handlers. Each one mounts the matching view, waits for it to
//! settle and prints what the view would draw.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::io::{self, Write};

use super::Command;
use crate::navigation::RecordingNavigator;
use crate::render;
use crate::startup::BlogClient;
use crate::view_state::{ViewRender, ViewState};
use crate::views::{
    AuthView, Bookmark, BookmarkOutcome, CommentsView, HomeView, LoginForm, LogoutOutcome,
    PostView, SignupForm, SubmitOutcome,
};

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Done,
    /// The server refused; errors were printed
    Rejected,
    /// A view navigated to the error page
    Failed,
}

/// Run `command` against the API and print the result to stdout.
pub async fn handle_command(client: &BlogClient, command: &Command) -> Result<CommandStatus> {
    let nav = RecordingNavigator::new();
    let gateway = &client.gateway;
    let ctx = &client.ctx;

    let status = match command {
        Command::Posts => {
            let home = HomeView::load(gateway, &nav).await;
            show(home.state(), HomeView::LOADING_TEXT, |_| render::home_page(&home))
        }
        Command::Post { id } => {
            AuthView::restore(gateway, &nav, ctx).await;
            let post = PostView::load(gateway, &nav, id).await;
            let user = ctx.current();
            let status = show(post.state(), PostView::LOADING_TEXT, |p| {
                render::post_page(p, user.as_ref())
            });
            if status == CommandStatus::Done {
                let comments = CommentsView::load(gateway, &nav, id).await;
                println!();
                show(comments.state(), CommentsView::LOADING_TEXT, |c| {
                    render::comment_list(c)
                })
            } else {
                status
            }
        }
        Command::Bookmark { post_id, remove } => {
            AuthView::restore(gateway, &nav, ctx).await;
            let bookmark = Bookmark::new(post_id.as_str(), true, *remove);
            match bookmark.toggle(gateway, &nav, ctx).await {
                BookmarkOutcome::Updated { .. } => {
                    let now = Bookmark::for_user(post_id.as_str(), true, ctx.current().as_ref());
                    println!("{}", render::bookmark_line(&now));
                    CommandStatus::Done
                }
                BookmarkOutcome::Rejected(errors) => {
                    println!("{}", render::error_list(errors.as_ref()));
                    CommandStatus::Rejected
                }
                BookmarkOutcome::SignedOut => {
                    println!("  ✗ Sign in first: blogfront login <username>");
                    CommandStatus::Rejected
                }
                BookmarkOutcome::Redirected => CommandStatus::Failed,
            }
        }
        Command::Comment { post_id, text } => {
            let mut comments = CommentsView::load(gateway, &nav, post_id).await;
            if comments.state().is_redirected() {
                CommandStatus::Failed
            } else {
                match comments.submit(gateway, &nav, text).await {
                    SubmitOutcome::Posted => {
                        show(comments.state(), CommentsView::LOADING_TEXT, |c| {
                            render::comment_list(c)
                        })
                    }
                    SubmitOutcome::Rejected(errors) => {
                        println!("{}", render::error_list(errors.as_ref()));
                        CommandStatus::Rejected
                    }
                    SubmitOutcome::Redirected => CommandStatus::Failed,
                }
            }
        }
        Command::Login { username } => {
            let password = prompt_password("Password: ")?;
            let state = AuthView::new()
                .login(gateway, &nav, ctx, &LoginForm::new(username.as_str(), password))
                .await;
            show(&state, "Signing in...", |user| {
                format!("  ✓ Signed in as {}", user.username)
            })
        }
        Command::Signup { name, username } => {
            let password = prompt_password("Password: ")?;
            let confirm_password = prompt_password("Confirm password: ")?;
            let form = SignupForm {
                name: name.clone(),
                username: username.clone(),
                password,
                confirm_password,
            };
            let state = AuthView::new().signup(gateway, &nav, ctx, &form).await;
            show(&state, "Creating account...", |user| {
                format!("  ✓ Welcome, {}", user.name)
            })
        }
        Command::Logout => match AuthView::logout(gateway, &nav, ctx).await {
            LogoutOutcome::SignedOut => {
                client
                    .session
                    .clear()
                    .wrap_err("Signed out, but the saved session could not be removed")?;
                println!("  ✓ Signed out");
                return Ok(CommandStatus::Done);
            }
            LogoutOutcome::Rejected(errors) => {
                println!("{}", render::error_list(errors.as_ref()));
                CommandStatus::Rejected
            }
            LogoutOutcome::Redirected => CommandStatus::Failed,
        },
        Command::Whoami => match AuthView::restore(gateway, &nav, ctx).await {
            Some(user) => {
                println!("{} (@{})", user.name, user.username);
                println!("  {} bookmarks", user.bookmarks.len());
                CommandStatus::Done
            }
            None if nav.visited_error_page() => CommandStatus::Failed,
            None => {
                println!("  Not signed in");
                CommandStatus::Done
            }
        },
    };

    if nav.visited_error_page() {
        print_error_page(client, nav.error_message());
        return Ok(CommandStatus::Failed);
    }

    client
        .persist_session()
        .wrap_err("Failed to save session")?;
    Ok(status)
}

/// Print a settled view and report how it ended.
fn show<T>(
    state: &ViewState<T>,
    loading_text: &str,
    ready: impl FnOnce(&T) -> String,
) -> CommandStatus {
    let status = match state.render() {
        ViewRender::Ready(_) => CommandStatus::Done,
        ViewRender::ErrorList(_) => CommandStatus::Rejected,
        ViewRender::Redirected | ViewRender::Loading => CommandStatus::Failed,
    };
    if let Some(text) = render::view(state, loading_text, ready) {
        println!("{}", text);
    }
    status
}

/// Stand-in for the `/error` page.
fn print_error_page(client: &BlogClient, message: Option<String>) {
    println!("{}", render::error_list(None));
    if let Some(message) = message {
        println!("  {}", message);
    }
    println!("  Could not get a usable answer from {}", client.origin);
    println!("  Check that the API is running, or pass --api <origin>.");
}

fn prompt_password(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().wrap_err("Failed to flush stdout")?;
    let password = rpassword::read_password().wrap_err("Failed to read password")?;
    if password.is_empty() {
        return Err(eyre!("Password cannot be empty"));
    }
    Ok(password)
}
