// Card markup is built as a string and mounted with `Html::from_html_unchecked`,
// so everything interpolated here has to go through `escape_html`.

use crate::model::Activity;

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '@' | '.' | '_' | '-')
}

/// Badge initials: first letter of the first two segments, upper-cased.
pub fn initials(identifier: &str) -> String {
    identifier
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn participant_item(activity: &str, participant: &str) -> String {
    let name = escape_html(participant);
    format!(
        r#"<li><span class="participant-badge">{badge}</span><span class="participant-name">{name}</span><button class="participant-delete" data-activity="{activity}" data-email="{name}" title="Remove participant">✖</button></li>"#,
        badge = escape_html(&initials(participant)),
        activity = escape_html(activity),
    )
}

fn participants_block(activity: &Activity) -> String {
    if activity.participants.is_empty() {
        return r#"<p class="no-participants">No participants yet</p>"#.to_string();
    }
    let items: String = activity
        .participants
        .iter()
        .map(|p| participant_item(&activity.name, p))
        .collect();
    format!(r#"<ul class="participants-list">{items}</ul>"#)
}

/// Inner markup of one `.activity-card`.
pub fn render_card(activity: &Activity) -> String {
    format!(
        concat!(
            "<h4>{name}</h4>",
            "<p>{description}</p>",
            "<p><strong>Schedule:</strong> {schedule}</p>",
            "<p><strong>Availability:</strong> {spots} spots left</p>",
            r#"<div class="participants-section"><h5>Participants</h5>{participants}</div>"#,
        ),
        name = escape_html(&activity.name),
        description = escape_html(&activity.description),
        schedule = escape_html(&activity.schedule),
        spots = activity.spots_left(),
        participants = participants_block(activity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, max: i64, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: "Strategy and tactics".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn initials_examples() {
        assert_eq!(initials("jane.doe@example.com"), "JD");
        assert_eq!(initials("bob"), "B");
        assert_eq!(initials(""), "");
        assert_eq!(initials("--__..@@"), "");
        assert_eq!(initials("  mary-ann smith"), "MA");
        assert_eq!(initials("élodie_roy"), "ÉR");
    }

    #[test]
    fn escapes_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn card_shows_spots_left() {
        let html = render_card(&activity("Chess Club", 12, &["a@x.edu", "b@x.edu"]));
        assert!(html.contains("<h4>Chess Club</h4>"));
        assert!(html.contains("<strong>Schedule:</strong> Fridays, 3:30 PM - 5:00 PM"));
        assert!(html.contains("<strong>Availability:</strong> 10 spots left"));
    }

    #[test]
    fn card_without_participants() {
        let html = render_card(&activity("Art", 5, &[]));
        assert!(html.contains(r#"<p class="no-participants">No participants yet</p>"#));
        assert!(!html.contains("participants-list"));
    }

    #[test]
    fn card_lists_participants_with_delete_buttons() {
        let html = render_card(&activity("Chess Club", 12, &["jane.doe@example.com"]));
        assert!(html.contains(r#"<span class="participant-badge">JD</span>"#));
        assert!(html.contains(r#"<span class="participant-name">jane.doe@example.com</span>"#));
        assert!(html.contains(r#"data-activity="Chess Club" data-email="jane.doe@example.com""#));
    }

    #[test]
    fn script_tags_are_inert() {
        let html = render_card(&activity(
            "<script>alert(1)</script>",
            3,
            &["<script>x</script>@evil.com"],
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<h4>&lt;script&gt;alert(1)&lt;/script&gt;</h4>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;@evil.com"));
    }

    #[test]
    fn quotes_cannot_break_out_of_attributes() {
        let html = render_card(&activity(r#"a" onclick="boom"#, 3, &["o'neil@x.com"]));
        assert!(html.contains(r#"data-activity="a&quot; onclick=&quot;boom""#));
        assert!(html.contains(r#"data-email="o&#39;neil@x.com""#));
    }
}
