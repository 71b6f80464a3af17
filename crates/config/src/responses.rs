//! Canned advisory responses
//!
//! Fixed Arabic texts keyed by intent and entity. Every intent has a
//! generic fallback, so response lookup is total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-intent responses: a specific text per entity plus a generic fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedResponses {
    pub generic: String,
    pub specific: HashMap<String, String>,
}

impl KeyedResponses {
    fn new(generic: &str, specific: &[(&str, &str)]) -> Self {
        Self {
            generic: generic.to_string(),
            specific: specific
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Specific text for the key if cataloged, else the generic fallback.
    pub fn lookup(&self, key: Option<&str>) -> &str {
        key.and_then(|k| self.specific.get(k))
            .map(String::as_str)
            .unwrap_or(&self.generic)
    }

    /// Specific text only; `None` when the key is absent from the catalog.
    pub fn specific_only(&self, key: &str) -> Option<&str> {
        self.specific.get(key).map(String::as_str)
    }
}

/// The full response catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCatalog {
    pub help: String,
    pub greeting: String,
    pub thanks: String,
    /// planting_time asked without a crop
    pub ask_crop_for_planting: String,
    /// planting_time for a crop missing from the region calendar
    pub planting_no_calendar: String,
    pub irrigation: KeyedResponses,
    pub disease_treat: KeyedResponses,
    pub pest_control: KeyedResponses,
    pub fertilization: KeyedResponses,
    pub spacing: KeyedResponses,
    pub harvest_time: KeyedResponses,
    /// (button id, title) suggestions offered when no intent was classified
    pub intent_suggestions: Vec<(String, String)>,
}

impl ResponseCatalog {
    pub fn builtin() -> Self {
        Self {
            help: "أهلًا! اسأل مثل:\n\
                   • متى ازرع الطماطم؟\n\
                   • ري الخيار كيف؟\n\
                   • علاج اللفحة على البندورة؟\n\
                   • مسافة زراعة البطاطا؟\n\
                   • تسميد الفلفل؟"
                .to_string(),
            greeting: "أهلًا وسهلًا 🌿 كيف أقدر أساعدك؟".to_string(),
            thanks: "عفوًا، بالتوفيق بالموسم! 🌱".to_string(),
            ask_crop_for_planting:
                "لإعطاء موعد زراعة أدق، اذكر اسم المحصول (مثال: متى ازرع الطماطم؟)."
                    .to_string(),
            planting_no_calendar:
                "عمومًا يتحدد الموعد حسب الحرارة المحلية. اذكر منطقتك لنصيحة أدق.".to_string(),
            irrigation: KeyedResponses::new(
                "قاعدة: ري عميق متباعد أفضل من ريات خفيفة متكررة. اذكر المحصول لنصائح أدق.",
                &[
                    (
                        "طماطم",
                        "ري منتظم بلا إغراق؛ اترك السطح يجف قليلًا بين الريات. صباحًا أفضل وتجنب البلل الليلي للأوراق.",
                    ),
                    (
                        "خيار",
                        "يحتاج رطوبة ثابتة خاصة بالحر؛ تجنب الجفاف المتكرر وزد الري مع الإثمار.",
                    ),
                    ("بطاطا", "ري معتدل وتربة جيدة الصرف لتفادي الأعفان."),
                    ("قمح", "يعتمد غالبًا على أمطار الشتاء؛ ري تكميلي عند الحاجة."),
                ],
            ),
            disease_treat: KeyedResponses::new(
                "للمكافحة الحيوية: حسّن التهوية، تجنّب البلل الليلي، ازل الأجزاء المصابة، اتّبع الدورة الزراعية، واستخدم مركبات نحاسية/كبريتية بتركيزات آمنة عند الحاجة.",
                &[
                    (
                        "اللفحة",
                        "تهوية جيدة، إزالة أوراق سفلية المصابة، تجنّب البلل الليلي، ورشّات نحاسية عضوية عند الحاجة.",
                    ),
                    (
                        "البياض الدقيقي",
                        "حسّن حركة الهواء، قلّل الرطوبة، رشّات كبريت/بيكربونات بوتاسيوم حسب الإرشادات.",
                    ),
                    (
                        "البياض الزغبي",
                        "اختر أصناف متحملة، حسّن الصرف والتهوية، رشّات نحاسية وقائية.",
                    ),
                    (
                        "الذبول",
                        "تجنّب التربة المغمورة، حسّن الصرف، اختر أصناف مقاومة، ودورة زراعية أطول.",
                    ),
                ],
            ),
            pest_control: KeyedResponses::new(
                "إدارة متكاملة للآفات: مصائد لاصقة صفراء، إزالة الأعشاب حول الحقل، تشجيع الأعداء الحيوية (الخنافس/الدبابير الطفيلية)، ورشّات صابونية/زيوت نباتية عند الحاجة.",
                &[
                    (
                        "المن",
                        "رشّات صابونية لطيفة، تشجيع الدعسوقات، تجنّب الآزوت الزائد.",
                    ),
                    (
                        "الذبابة البيضاء",
                        "مصائد صفراء، تنظيف الحواف، رشّات صابونية/زيوت، وراقب ظهور السلالات المقاومة.",
                    ),
                    (
                        "التربس",
                        "خفض الغبار، مصائد زرقاء، رشّات صابونية مبكرة، نباتات مصيدة إن أمكن.",
                    ),
                    (
                        "حافرة الاوراق",
                        "إزالة الأوراق المصابة مبكرًا، تشجيع الأعداء الحيوية، مصائد فرمونية عند التوفر.",
                    ),
                    (
                        "توتا ابسولوتا",
                        "مصائد فرمونية ومائية، تغطية ببيت بلاستيكي محكم، إزالة بقايا المحصول ودفنها جيدًا.",
                    ),
                    (
                        "دودة ورق القطن",
                        "جمع يدوي مبكر، تشجيع الطيور/الأعداء الحيوية، مصائد ضوئية بعيدًا عن الحقل.",
                    ),
                ],
            ),
            fertilization: KeyedResponses::new(
                "ابدأ بتحليل تربة. مبدئيًا: كومبوست متحلل جيّد، ثم سماد متوازن بكميات صغيرة مقسّطة حسب مراحل النمو. لا تُفرط بالنيتروجين.",
                &[
                    (
                        "طماطم",
                        "كومبوست قبل الزراعة + تسميد متوازن؛ زد البوتاسيوم عند التزهير والإثمار.",
                    ),
                    (
                        "خيار",
                        "تسميد متدرّج خفيف لكن مستمر؛ حسّاس للملوحة، راقب التوصيل الكهربائي.",
                    ),
                    (
                        "فلفل",
                        "كومبوست + بوتاسيوم جيد بداية الإزهار؛ راقب الكالسيوم لتجنّب عفن الطرف الزهري.",
                    ),
                ],
            ),
            spacing: KeyedResponses::new(
                "قاعدة عامة: مسافة أكبر = تهوية أفضل وأمراض أقل. اذكر المحصول.",
                &[
                    (
                        "طماطم",
                        "بين الشتلات 40–60 سم، وبين الخطوط 80–100 سم (حسب الصنف والتربية).",
                    ),
                    (
                        "خيار",
                        "على التعريشة: 30–40 سم بين الشتلات، 1.5–2 م بين الخطوط.",
                    ),
                    ("بطاطا", "بين الدرنات 25–35 سم، بين الخطوط 70–90 سم."),
                ],
            ),
            harvest_time: KeyedResponses::new(
                "يختلف حسب الصنف والحرارة. اذكر المحصول.",
                &[
                    ("طماطم", "غالبًا 70–90 يومًا من الشتل حتى أول حصاد."),
                    ("خيار", "45–60 يومًا من الزراعة."),
                    ("بطاطا", "90–120 يومًا حسب الموسم والصنف."),
                ],
            ),
            intent_suggestions: vec![
                ("intent_planting_time".to_string(), "موعد الزراعة".to_string()),
                ("intent_irrigation".to_string(), "الري".to_string()),
                ("intent_disease_treat".to_string(), "علاج الأمراض".to_string()),
                ("intent_pest_control".to_string(), "مكافحة الآفات".to_string()),
                ("intent_fertilization".to_string(), "التسميد".to_string()),
                ("intent_spacing".to_string(), "المسافات".to_string()),
            ],
        }
    }
}
