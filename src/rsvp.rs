//! Typed RSVP form: enumerated fields, validation, and the urlencoded
//! payload the form relay expects.

/// Form relay endpoint (alias id, so no inbox address ships in the bundle).
pub const FORM_RELAY_URL: &str = "https://formsubmit.co/9c41f7b2e35d48a1b06e2f8c5d7a9e34";

/// Guests arrive between these local times, inclusive.
pub const ARRIVAL_EARLIEST: (u8, u8) = (14, 0);
pub const ARRIVAL_LATEST: (u8, u8) = (23, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diet {
    Meat,
    Fish,
    Vegan,
}

impl Diet {
    pub fn all() -> [Diet; 3] {
        [Diet::Meat, Diet::Fish, Diet::Vegan]
    }

    /// Value sent to the form relay.
    pub fn form_value(&self) -> &'static str {
        match self {
            Diet::Meat => "meat",
            Diet::Fish => "fish",
            Diet::Vegan => "vegan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Diet::Meat => "Meat",
            Diet::Fish => "Fish",
            Diet::Vegan => "Vegan",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drink {
    NonAlco,
    Beer,
    Wine,
    Else,
}

impl Drink {
    pub fn all() -> [Drink; 4] {
        [Drink::NonAlco, Drink::Beer, Drink::Wine, Drink::Else]
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            Drink::NonAlco => "non-alco",
            Drink::Beer => "beer",
            Drink::Wine => "wine/liquer/coctails",
            Drink::Else => "else",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Drink::NonAlco => "Non-alco",
            Drink::Beer => "Beer",
            Drink::Wine => "Wine/liquer/coctails",
            Drink::Else => "Else",
        }
    }
}

/// Raw form state as the inputs hold it. `guests` stays a string until
/// validation so the field can round-trip whatever was typed.
#[derive(Clone, Debug, PartialEq)]
pub struct RsvpForm {
    pub name: String,
    pub guests: String,
    pub diet: Diet,
    pub drinks: Vec<Drink>,
    pub arrival_time: String,
    pub fun_fact: String,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            guests: String::new(),
            diet: Diet::Meat,
            drinks: Vec::new(),
            // Default to the party start time.
            arrival_time: "14:00".to_string(),
            fun_fact: String::new(),
        }
    }
}

impl RsvpForm {
    pub fn toggle_drink(&mut self, drink: Drink) {
        if let Some(pos) = self.drinks.iter().position(|d| *d == drink) {
            self.drinks.remove(pos);
        } else {
            self.drinks.push(drink);
        }
    }

    /// Checks every field and either yields the payload to send or the full
    /// list of problems, one per failed field, in field order.
    pub fn validate(&self) -> Result<RsvpSubmission, Vec<RsvpIssue>> {
        let mut issues = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            issues.push(RsvpIssue::EmptyName);
        }
        let guests = match self.guests.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                issues.push(RsvpIssue::InvalidGuests);
                None
            }
        };
        match parse_arrival(&self.arrival_time) {
            Some(at) if at >= ARRIVAL_EARLIEST && at <= ARRIVAL_LATEST => {}
            _ => issues.push(RsvpIssue::ArrivalOutsideWindow),
        }
        let fun_fact = self.fun_fact.trim();
        if fun_fact.is_empty() {
            issues.push(RsvpIssue::EmptyFunFact);
        }

        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(RsvpSubmission {
            name: name.to_string(),
            guests: guests.unwrap_or(1),
            diet: self.diet,
            drinks: self.drinks.clone(),
            arrival_time: self.arrival_time.clone(),
            fun_fact: fun_fact.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpIssue {
    EmptyName,
    InvalidGuests,
    ArrivalOutsideWindow,
    EmptyFunFact,
}

impl RsvpIssue {
    pub fn message(&self) -> &'static str {
        match self {
            RsvpIssue::EmptyName => "Please tell us your name.",
            RsvpIssue::InvalidGuests => "Number of guests must be at least 1.",
            RsvpIssue::ArrivalOutsideWindow => "Arrival time must be between 14:00 and 23:00.",
            RsvpIssue::EmptyFunFact => "Don't be shy, share a fun fact!",
        }
    }
}

/// A validated RSVP, ready for the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub name: String,
    pub guests: u32,
    pub diet: Diet,
    pub drinks: Vec<Drink>,
    pub arrival_time: String,
    pub fun_fact: String,
}

impl RsvpSubmission {
    pub fn hype_level(&self) -> u32 {
        self.guests.saturating_mul(10)
    }

    /// Key/value pairs in the relay's field naming; drinks repeat the key
    /// once per selection.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("name", self.name.clone()),
            ("guests", self.guests.to_string()),
            ("diet", self.diet.form_value().to_string()),
        ];
        for drink in &self.drinks {
            pairs.push(("drinks", drink.form_value().to_string()));
        }
        pairs.push(("arrivalTime", self.arrival_time.clone()));
        pairs.push(("funFact", self.fun_fact.clone()));
        pairs
    }
}

/// Parses "HH:MM" from a time input. None for anything malformed.
pub fn parse_arrival(raw: &str) -> Option<(u8, u8)> {
    let (h, m) = raw.split_once(':')?;
    let hour = h.parse::<u8>().ok()?;
    let minute = m.parse::<u8>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// application/x-www-form-urlencoded body for the relay POST.
pub fn urlencoded(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            let encoded: String = js_sys::encode_uri_component(value).into();
            format!("{}={}", key, encoded)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RsvpForm {
        RsvpForm {
            name: "Maks".into(),
            guests: "3".into(),
            diet: Diet::Vegan,
            drinks: vec![Drink::Beer, Drink::Else],
            arrival_time: "15:30".into(),
            fun_fact: "I once juggled flaming cakes".into(),
        }
    }

    #[test]
    fn valid_form_produces_a_submission() {
        let sub = filled().validate().expect("form should validate");
        assert_eq!(sub.name, "Maks");
        assert_eq!(sub.guests, 3);
        assert_eq!(sub.hype_level(), 30);
    }

    #[test]
    fn name_and_fun_fact_are_trimmed() {
        let mut form = filled();
        form.name = "  Maks  ".into();
        form.fun_fact = " cake fact ".into();
        let sub = form.validate().expect("form should validate");
        assert_eq!(sub.name, "Maks");
        assert_eq!(sub.fun_fact, "cake fact");
    }

    #[test]
    fn each_broken_field_reports_its_issue() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.validate().unwrap_err(), vec![RsvpIssue::EmptyName]);

        for guests in ["", "abc", "0", "-2"] {
            let mut form = filled();
            form.guests = guests.into();
            assert_eq!(
                form.validate().unwrap_err(),
                vec![RsvpIssue::InvalidGuests],
                "guests={guests:?}"
            );
        }

        for arrival in ["", "13:59", "23:01", "nope"] {
            let mut form = filled();
            form.arrival_time = arrival.into();
            assert_eq!(
                form.validate().unwrap_err(),
                vec![RsvpIssue::ArrivalOutsideWindow],
                "arrival={arrival:?}"
            );
        }

        let mut form = filled();
        form.fun_fact = "".into();
        assert_eq!(form.validate().unwrap_err(), vec![RsvpIssue::EmptyFunFact]);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        for arrival in ["14:00", "23:00"] {
            let mut form = filled();
            form.arrival_time = arrival.into();
            assert!(form.validate().is_ok(), "arrival={arrival:?}");
        }
    }

    #[test]
    fn all_issues_are_reported_together() {
        let form = RsvpForm {
            arrival_time: "02:00".into(),
            ..RsvpForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec![
                RsvpIssue::EmptyName,
                RsvpIssue::InvalidGuests,
                RsvpIssue::ArrivalOutsideWindow,
                RsvpIssue::EmptyFunFact,
            ]
        );
    }

    #[test]
    fn form_pairs_use_the_relay_field_names() {
        let sub = filled().validate().expect("form should validate");
        assert_eq!(
            sub.form_pairs(),
            vec![
                ("name", "Maks".to_string()),
                ("guests", "3".to_string()),
                ("diet", "vegan".to_string()),
                ("drinks", "beer".to_string()),
                ("drinks", "else".to_string()),
                ("arrivalTime", "15:30".to_string()),
                ("funFact", "I once juggled flaming cakes".to_string()),
            ]
        );
    }

    #[test]
    fn no_drinks_selected_is_allowed() {
        let mut form = filled();
        form.drinks.clear();
        let sub = form.validate().expect("form should validate");
        assert!(!sub.form_pairs().iter().any(|(k, _)| *k == "drinks"));
    }

    #[test]
    fn toggle_drink_adds_then_removes() {
        let mut form = RsvpForm::default();
        form.toggle_drink(Drink::Wine);
        assert_eq!(form.drinks, vec![Drink::Wine]);
        form.toggle_drink(Drink::Wine);
        assert!(form.drinks.is_empty());
    }

    #[test]
    fn arrival_parsing_rejects_nonsense() {
        assert_eq!(parse_arrival("15:30"), Some((15, 30)));
        assert_eq!(parse_arrival("24:00"), None);
        assert_eq!(parse_arrival("12:60"), None);
        assert_eq!(parse_arrival("1230"), None);
        assert_eq!(parse_arrival(""), None);
    }
}
