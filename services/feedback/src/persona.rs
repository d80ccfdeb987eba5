//! The feedback persona: the behavioral contract handed to the
//! language-model collaborator. Nothing here is enforced programmatically;
//! the runtime's model is expected to follow these instructions.

/// The cafe menu of the day.
///
/// The persona text embeds these lines verbatim, so the script cannot drift
/// from the menu data.
#[derive(Debug, Clone)]
pub struct Menu {
    breakfast: Vec<String>,
    lunch: Vec<String>,
    snacks: Vec<String>,
}

impl Menu {
    pub fn today() -> Self {
        Self {
            breakfast: vec!["Set dosa and sambar".to_string()],
            lunch: [
                "Roti",
                "Rice",
                "Dal fry",
                "Aloo gobhi",
                "Baigan bharta",
                "Salad",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            snacks: vec!["Maggi".to_string()],
        }
    }

    pub fn breakfast(&self) -> &[String] {
        &self.breakfast
    }

    pub fn lunch(&self) -> &[String] {
        &self.lunch
    }

    pub fn snacks(&self) -> &[String] {
        &self.snacks
    }

    fn meal_line(items: &[String]) -> String {
        items.join(", ")
    }
}

/// Renders the full instruction script around the given menu.
pub fn instructions(menu: &Menu) -> String {
    format!(
        concat!(
            "You are the Bizom Cafe voice feedback agent. You handle feedback from ",
            "Bizom employees about the cafe: food quality, menu items, and suggestions. ",
            "Be warm and solution-oriented. Acknowledge what they said before responding. ",
            "Keep responses under 3 sentences. ",
            "Focus only on the cafe menu. Today's menu:\n",
            "BREAKFAST: {breakfast}.\n",
            "LUNCH: {lunch}.\n",
            "SNACKS: {snacks}.\n",
            "If they talk about something unrelated, briefly redirect: e.g. 'I'm here for ",
            "cafe feedback only\u{2014}how was the food today?' ",
            "When they give feedback, tie it to the menu when possible and say you'll pass it to ",
            "the kitchen. If their feedback is vague, ask which item or meal they mean. ",
            "If a colleague is upset or frustrated, apologize sincerely and offer a concrete ",
            "next step (e.g. 'Sorry about that\u{2014}we'll share this with the kitchen right away.'). ",
            "Never argue or make excuses. ",
            "If they seem done\u{2014}e.g. that's it, nothing else, no more\u{2014}say a brief thank you ",
            "and close (e.g. 'Thanks, that's really helpful. Take care!'). ",
            "Respond in Indian English: natural, warm tone; use 'kindly', 'sure' where it fits."
        ),
        breakfast = Menu::meal_line(menu.breakfast()),
        lunch = Menu::meal_line(menu.lunch()),
        snacks = Menu::meal_line(menu.snacks()),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_menu_item_is_embedded() {
        let menu = Menu::today();
        let script = instructions(&menu);
        for item in menu
            .breakfast()
            .iter()
            .chain(menu.lunch())
            .chain(menu.snacks())
        {
            assert!(script.contains(item), "menu item missing from script: {}", item);
        }
    }

    #[test]
    fn test_policy_rules_are_present() {
        let script = instructions(&Menu::today());
        // Topic restriction and redirection.
        assert!(script.contains("cafe feedback only"));
        // Acknowledge before responding.
        assert!(script.contains("Acknowledge what they said before responding"));
        // Length cap.
        assert!(script.contains("under 3 sentences"));
        // Kitchen commitment and clarifying question.
        assert!(script.contains("pass it to the kitchen"));
        assert!(script.contains("ask which item or meal they mean"));
        // De-escalation.
        assert!(script.contains("Never argue or make excuses"));
        // Closing behavior.
        assert!(script.contains("say a brief thank you"));
        // Register.
        assert!(script.contains("Indian English"));
        assert!(script.contains("'kindly'"));
    }

    #[test]
    fn test_script_is_stable_across_calls() {
        let menu = Menu::today();
        assert_eq!(instructions(&menu), instructions(&menu));
    }
}
