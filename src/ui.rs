use crate::models::{Mood, Reframe, SessionState, TimeOfDay};
use crate::page::Page;
use crate::session::{PRESET_BLOCKERS, PRESET_HABITS, motivational_message};
use crate::state::DashboardView;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub fn render_index(session: &SessionState, dashboard: &DashboardView) -> String {
    let content = match session.current_page {
        Page::Landing => render_landing(),
        Page::Onboarding => render_onboarding(),
        Page::CognitiveSetup => render_cognitive_setup(),
        Page::Dashboard => render_dashboard(session, dashboard),
        Page::Insights => render_insights(session),
    };

    let notice = dashboard
        .notice
        .as_deref()
        .map(|notice| format!(r#"<p class="notice">{}</p>"#, encode_text(notice)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{TITLE}}", session.current_page.title())
        .replace("{{PAGE}}", session.current_page.key())
        .replace("{{NOTICE}}", &notice)
        .replace("{{CONTENT}}", &content)
}

fn render_landing() -> String {
    format!(
        r#"<p class="lede">Build lasting habits with science-backed micro-actions.</p>
<div class="row">{}{}</div>"#,
        nav_button(Page::Onboarding, "Get Started", true),
        nav_button(Page::Dashboard, "Go to dashboard", false),
    )
}

fn render_onboarding() -> String {
    let habits: String = PRESET_HABITS
        .iter()
        .map(|habit| {
            format!(
                r#"<label class="choice"><input type="radio" name="habit" value="{}" /> {}</label>"#,
                encode_double_quoted_attribute(habit),
                encode_text(habit)
            )
        })
        .collect();
    let times: String = TimeOfDay::ALL
        .iter()
        .map(|time| {
            format!(
                r#"<label class="pill"><input type="radio" name="time" value="{0}" /> {0}</label>"#,
                time.label()
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/onboarding" class="stack">
  <h2>Choose a Micro-Habit</h2>
  {habits}
  <h2>Or Create Your Own</h2>
  <input type="text" name="custom_habit" placeholder="e.g., Meditate for 1 minute" />
  <h2>When do you want to do it?</h2>
  <div class="row">{times}</div>
  <button type="submit" class="primary">Next</button>
</form>"#
    )
}

fn render_cognitive_setup() -> String {
    let blockers: String = PRESET_BLOCKERS
        .iter()
        .map(|blocker| {
            format!(
                r#"<label class="choice"><input type="radio" name="blocker" value="{}" /> {}</label>"#,
                encode_double_quoted_attribute(blocker),
                encode_text(blocker)
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/cognitive-setup" class="stack">
  <h2>What's a common blocker for you?</h2>
  {blockers}
  <h2>Or Add Your Own</h2>
  <input type="text" name="custom_blocker" placeholder="e.g., I feel overwhelmed." />
  <button type="submit" class="primary">Start My Journey</button>
</form>"#
    )
}

fn render_dashboard(session: &SessionState, dashboard: &DashboardView) -> String {
    let habit = match &session.habit {
        Some(habit) => format!(
            r#"<p>Today's Habit: <strong>{}</strong></p><p class="muted">Time: {}</p>"#,
            encode_text(&habit.name),
            habit.time.label()
        ),
        None => r#"<p class="muted">No habit chosen yet.</p>"#.to_string(),
    };
    let blocker = if session.blocker_text.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="muted">Blocker: {}</p>"#, encode_text(&session.blocker_text))
    };

    let moods: String = Mood::ALL
        .iter()
        .map(|mood| {
            let class = if *mood == session.mood { "mood selected" } else { "mood" };
            format!(
                r#"<button type="submit" name="mood" value="{}" class="{class}">{}</button>"#,
                mood.key(),
                mood.emoji()
            )
        })
        .collect();

    let submit = if dashboard.pending {
        r#"<button type="submit" class="primary" disabled>Analyzing your thoughts...</button>"#
    } else {
        r#"<button type="submit" class="primary">Submit for Reframing</button>"#
    };

    let reframe = dashboard.last.as_ref().map(render_reframe).unwrap_or_default();

    format!(
        r#"<section class="card">
  <h2>Your Daily Habit</h2>
  {habit}{blocker}
  <div class="row">
    <form method="post" action="/habit/complete"><button type="submit" class="done">I did it!</button></form>
    <form method="post" action="/habit/incomplete"><button type="submit" class="missed">I didn't do it!</button></form>
  </div>
</section>
<section class="card">
  <h2>Streak</h2>
  <p class="streak">{streak} <span>day(s)</span></p>
</section>
<section class="card">
  <h2>How are you feeling?</h2>
  <form method="post" action="/mood" class="row">{moods}</form>
</section>
<section class="card">
  <h2>Journal / Reflection</h2>
  <p class="muted">Try to complete this sentence: If [this situation happens], then [this belief about myself must be true].</p>
  <form method="post" action="/reflection" class="stack">
    <textarea name="journal" placeholder="What's on your mind?">{journal}</textarea>
    {submit}
  </form>
</section>
{reframe}
<div class="row">{back}{insights}</div>"#,
        streak = session.streak,
        journal = encode_text(&session.journal_text),
        back = nav_button(Page::CognitiveSetup, "Back", false),
        insights = nav_button(Page::Insights, "View Insights", true),
    )
}

fn render_reframe(reframe: &Reframe) -> String {
    if reframe.is_failure() {
        return String::new();
    }
    let result = &reframe.result;
    format!(
        r#"<section class="card">
  <h2>Thought Insight &amp; Reframe</h2>
  <p><strong>🧩 Assumption:</strong> {}</p>
  <p><strong>💭 Mood Impact:</strong> {}</p>
  <p><strong>💬 Reframe:</strong> <em>{}</em></p>
  <p><strong>🧪 Micro-action:</strong> {}</p>
</section>"#,
        encode_text(&result.assumption),
        encode_text(&result.mood_impact),
        encode_text(&result.reframe),
        encode_text(&result.micro_action),
    )
}

fn render_insights(session: &SessionState) -> String {
    format!(
        r#"<section class="card"><h2>Current Habit</h2><p>{habit}</p></section>
<section class="card"><h2>Current Streak</h2><p class="streak">{streak} <span>days</span></p></section>
<section class="card"><h2>Motivational Message</h2><p class="muted"><em>{message}</em></p></section>
{back}"#,
        habit = encode_text(session.habit_name().unwrap_or("No habit set")),
        streak = session.streak,
        message = encode_text(&motivational_message(session.streak)),
        back = nav_button(Page::Dashboard, "Back to Dashboard", true),
    )
}

fn nav_button(page: Page, label: &str, primary: bool) -> String {
    let class = if primary { "primary" } else { "secondary" };
    format!(
        r#"<form method="post" action="/navigate"><input type="hidden" name="page" value="{}" /><button type="submit" class="{class}">{label}</button></form>"#,
        page.key()
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Micro Habit</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #2f6fdb;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .stack {
      display: grid;
      gap: 12px;
    }

    .choice, .pill {
      display: block;
      padding: 12px 16px;
      border-radius: 12px;
      background: var(--card);
      cursor: pointer;
    }

    input[type="text"], textarea {
      width: 100%;
      padding: 10px;
      border-radius: 10px;
      border: 1px solid #ccc;
      font: inherit;
    }

    textarea {
      min-height: 96px;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 12px 20px;
      font: inherit;
      cursor: pointer;
    }

    button.primary { background: var(--accent); color: #fff; }
    button.secondary { background: #d9d9d9; color: var(--ink); }
    button.done { background: #2e9d5b; color: #fff; }
    button.missed { background: #d6453d; color: #fff; }
    button.mood { font-size: 2rem; background: transparent; }
    button.mood.selected { background: #cfe0ff; }
    button:disabled { opacity: 0.6; cursor: progress; }

    .streak {
      font-size: 3rem;
      font-weight: 700;
      text-align: center;
      margin: 8px 0 0;
    }

    .streak span {
      font-size: 1.2rem;
    }

    .muted {
      color: #6b6b6b;
    }

    .notice {
      text-align: center;
      font-weight: 600;
      color: var(--accent-2);
    }
  </style>
</head>
<body>
  <main class="app" data-page="{{PAGE}}">
    <h1>{{TITLE}}</h1>
    {{NOTICE}}
    {{CONTENT}}
  </main>
</body>
</html>
"#;
