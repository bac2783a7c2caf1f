//! Static page content. Nothing in here changes after startup.

/// Display tag for a skill bar fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Orange,
    Yellow,
    Purple,
    Green,
    Blue,
    DeepBlue,
}

impl ColorTag {
    pub fn css_class(self) -> &'static str {
        match self {
            ColorTag::Orange => "fill-orange",
            ColorTag::Yellow => "fill-yellow",
            ColorTag::Purple => "fill-purple",
            ColorTag::Green => "fill-green",
            ColorTag::Blue => "fill-blue",
            ColorTag::DeepBlue => "fill-deep-blue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub color: ColorTag,
}

pub const SKILLS: [SkillEntry; 6] = [
    SkillEntry { name: "HTML/CSS", level: 98, color: ColorTag::Orange },
    SkillEntry { name: "JavaScript", level: 95, color: ColorTag::Yellow },
    SkillEntry { name: "GSAP", level: 75, color: ColorTag::Purple },
    SkillEntry { name: "Vue", level: 40, color: ColorTag::Green },
    SkillEntry { name: "React", level: 30, color: ColorTag::Blue },
    SkillEntry { name: "Node", level: 20, color: ColorTag::DeepBlue },
];

pub const OWNER_NAME: &str = "정소리";

pub struct FactCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "웹 개발의 세계에 발을 들인 지 9년이 되었습니다. \
     매일 새로운 기술을 배우고, 더 나은 사용자 경험을 만들기 위해 고민합니다.",
    "단순히 코드를 작성하는 것을 넘어, 사용자의 마음을 움직이는 \
     인터랙티브한 웹 경험을 만드는 것이 저의 목표입니다.",
];

/// (label, chip class)
pub const ABOUT_TAGS: [(&str, &str); 3] = [
    ("프론트엔드", "chip-purple"),
    ("UI/UX", "chip-pink"),
    ("웹 애니메이션", "chip-blue"),
];

pub const ABOUT_FACTS: [FactCard; 3] = [
    FactCard { title: "경력", body: "9년 프론트엔드 개발" },
    FactCard { title: "전문분야", body: "React, JavaScript, 웹 애니메이션" },
    FactCard { title: "목표", body: "사용자 중심의 혁신적인 웹 경험 창조" },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub accent: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { icon: "📧", label: "이메일", value: "enne3939@gmail.com", accent: "accent-purple" },
    ContactChannel { icon: "📱", label: "전화", value: "010-4336-5835", accent: "accent-pink" },
    ContactChannel { icon: "🌐", label: "GitHub", value: "sorie.github.io", accent: "accent-blue" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_skills_with_valid_levels() {
        assert_eq!(SKILLS.len(), 6);
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn skill_names_are_unique() {
        let names: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SKILLS.len());
    }

    #[test]
    fn known_levels() {
        let level = |name: &str| SKILLS.iter().find(|s| s.name == name).map(|s| s.level);
        assert_eq!(level("React"), Some(30));
        assert_eq!(level("HTML/CSS"), Some(98));
        assert_eq!(level("Node"), Some(20));
    }
}
