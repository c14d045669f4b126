use crate::models::PromptRequest;

const PREAMBLE: &str = "You are an expert prompt creator for AI image generators (like Midjourney or DALL-E).
Your goal is to take a list of user inputs and combine them into a single, detailed,
vivid, and highly effective image prompt.";

const RULES: &str = "**Rules:**
- Combine all elements naturally into a scene description.
- Be descriptive. Instead of \"a person wearing a red shirt\", say \"A person is styled in a vibrant red t-shirt...\".
- The prompt should be a single paragraph.
- Add details about lighting, camera angle, and style (e.g., \"photorealistic\", \"cinematic lighting\", \"wide-angle shot\", \"4K\", \"masterpiece\", \"ultra-detailed\").
- Enhance the \"vibe\" by translating it into descriptive artistic terms.";

const CLOSING: &str = "Now, generate the perfect image prompt based on those inputs.";

pub const VEHICLE_MARKER: &str = "- Vehicle:";
pub const CUSTOM_MARKER: &str = "- Custom Details:";

/// Render the instruction sent to the text-generation model.
///
/// Clause order is fixed: subject, location, vibe, clothing, vehicle (only
/// when `has_car`), custom details (only when non-empty), closing line.
/// Field values are interpolated verbatim.
pub fn render_instruction(request: &PromptRequest) -> String {
    let mut lines = vec![
        PREAMBLE.to_string(),
        String::new(),
        RULES.to_string(),
        String::new(),
        "**User Inputs to use:**".to_string(),
        format!("- Main Subject: {}.", request.subject),
        format!("- Location: The scene is set at a {}.", request.location),
        format!("- Vibe/Mood: The overall vibe should be {}.", request.vibe),
        String::new(),
        "**Optional Details (include if provided):**".to_string(),
        format!(
            "- Clothing: The subject is wearing a {} {}.",
            request.cloth_color, request.cloth
        ),
    ];
    if let Some(car_model) = request.vehicle() {
        lines.push(format!("{} Include a {} nearby.", VEHICLE_MARKER, car_model));
    }
    if let Some(details) = request.custom_details() {
        lines.push(format!("{} Also include the following: {}", CUSTOM_MARKER, details));
    }
    lines.push(String::new());
    lines.push(CLOSING.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PromptRequest {
        PromptRequest {
            subject: "a dragon".into(),
            location: "a snowy peak".into(),
            vibe: "epic".into(),
            cloth: "cloak".into(),
            cloth_color: "silver".into(),
            has_car: false,
            car_model: String::new(),
            custom_options: Some(String::new()),
        }
    }

    #[test]
    fn test_scenario_dragon() {
        let text = render_instruction(&request());
        assert!(text.contains("a dragon"));
        assert!(text.contains("a snowy peak"));
        assert!(text.contains("epic"));
        assert!(!text.contains(VEHICLE_MARKER));
        assert!(!text.contains(CUSTOM_MARKER));
        assert!(text.ends_with(CLOSING));
    }

    #[test]
    fn test_car_model_only_with_car() {
        let mut req = request();
        req.car_model = "DeLorean".into();
        assert!(!render_instruction(&req).contains("DeLorean"));

        req.has_car = true;
        let text = render_instruction(&req);
        assert!(text.contains("DeLorean"));
        assert!(text.contains(VEHICLE_MARKER));
    }

    #[test]
    fn test_custom_options_verbatim() {
        let mut req = request();
        req.custom_options = Some("holding a <lantern> & \"map\"".into());
        let text = render_instruction(&req);
        assert!(text.contains("holding a <lantern> & \"map\""));

        req.custom_options = None;
        assert!(!render_instruction(&req).contains(CUSTOM_MARKER));
    }

    #[test]
    fn test_clause_order() {
        let mut req = request();
        req.has_car = true;
        req.car_model = "Jeep".into();
        req.custom_options = Some("a red kite".into());
        let text = render_instruction(&req);

        let positions: Vec<usize> = [
            "- Main Subject:",
            "- Location:",
            "- Vibe/Mood:",
            "- Clothing:",
            VEHICLE_MARKER,
            CUSTOM_MARKER,
            CLOSING,
        ]
        .iter()
        .map(|marker| text.find(marker).expect(marker))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_car_with_blank_model_keeps_clause() {
        let mut req = request();
        req.has_car = true;
        let text = render_instruction(&req);
        assert!(text.contains("- Vehicle: Include a  nearby."));
        assert!(!text.contains(CUSTOM_MARKER));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let req = request();
        assert_eq!(render_instruction(&req), render_instruction(&req));
    }

    #[test]
    fn test_empty_fields_still_render() {
        let req = PromptRequest {
            subject: String::new(),
            ..Default::default()
        };
        let text = render_instruction(&req);
        assert!(text.contains("- Main Subject: ."));
        assert!(text.contains("- Clothing: The subject is wearing a  ."));
    }
}
