//! Unscored question sets kept for the driver/trainer history tool and the
//! early trainee draft. Option weights are zero throughout.

use super::standard::{
    DRIVER_NOT_READY, DRIVER_READY, TRAINER_MULTIPLE_MORE, TRAINER_ONE_MORE, TRAINER_READY,
    VAN_COACHING,
};
use super::{CatalogProfile, CatalogVariant, QuestionCatalog};
use crate::workflows::ride_along::domain::{
    AnswerOption, QuestionDefinition, ReportRole, SubjectRole,
};

pub(super) fn driver_trainer() -> QuestionCatalog {
    QuestionCatalog {
        profile: CatalogProfile {
            name: CatalogVariant::DriverTrainer.as_str().to_string(),
            subject_roles: vec![SubjectRole::Driver, SubjectRole::Trainer],
            scoring: false,
            keeps_history: true,
        },
        questions: questions(PoliteScale::GoodMid),
        exclusive_pairs: Vec::new(),
    }
}

pub(super) fn trainee_basic() -> QuestionCatalog {
    QuestionCatalog {
        profile: CatalogProfile {
            name: CatalogVariant::TraineeBasic.as_str().to_string(),
            subject_roles: vec![SubjectRole::Trainee],
            scoring: false,
            keeps_history: false,
        },
        questions: questions(PoliteScale::GoodBad),
        exclusive_pairs: Vec::new(),
    }
}

/// The draft filed impolite treatment as critical; the history tool files it
/// as an improvement area.
#[derive(Clone, Copy)]
enum PoliteScale {
    GoodMid,
    GoodBad,
}

fn plain(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption::new(value, label, 0)
}

fn tiered(good: &'static str, mid: &'static str, bad: &'static str) -> Vec<AnswerOption> {
    vec![plain("good", good), plain("mid", mid), plain("bad", bad)]
}

fn graded(id: &'static str, title: &'static str, options: Vec<AnswerOption>) -> QuestionDefinition {
    QuestionDefinition::single(id, title, title, ReportRole::Graded, options)
}

fn questions(polite: PoliteScale) -> Vec<QuestionDefinition> {
    let impolite = "🔧 Not always polite or respectful with customers.";
    let polite_options = match polite {
        PoliteScale::GoodMid => vec![
            plain("good", "✅ Polite and respectful with customers."),
            plain("mid", impolite),
        ],
        PoliteScale::GoodBad => vec![
            plain("good", "✅ Polite and respectful with customers."),
            plain("bad", impolite),
        ],
    };

    vec![
        graded(
            "driving",
            "Driving Aptitudes",
            tiered(
                "✅ Good driver: full stops, speed limits, follows traffic rules.",
                "🔧 Drives well, but has some minor bad habits; needs coaching.",
                "❌ Weak driver: ignores stops, speeds, breaks traffic rules.",
            ),
        ),
        graded(
            "organize_van",
            "Van Organization",
            tiered(
                "✅ Understands the importance of being organized with both overflows and bags.",
                "🔧 Understands the importance of being organized, but needs more practice.",
                "❌ Does not understand the importance of being organized.",
            ),
        )
        .with_coaching(VAN_COACHING),
        graded(
            "bag_overflow",
            "Bag vs Overflows",
            tiered(
                "✅ Understands the difference between packages in a bag and overflows.",
                "🔧 Partial understanding of the difference between packages in a bag and overflows.",
                "❌ Confuses packages in a bag and overflows; wastes time searching wrong places.",
            ),
        ),
        graded(
            "flex",
            "Flex App Usage",
            tiered(
                "✅ Good understanding of the Amazon Flex app.",
                "🔧 Needs time to get used to the Amazon Flex app.",
                "❌ Limited understanding of the Amazon Flex app.",
            ),
        ),
        graded(
            "photos",
            "Picture on Delivery",
            tiered(
                "✅ Takes clear pictures on deliveries.",
                "🔧 Occasionally takes unclear or poor pictures.",
                "❌ Consistently takes unclear or poor pictures.",
            ),
        ),
        graded(
            "customer_instructions",
            "Customer Instructions",
            tiered(
                "✅ Follows all customer instructions.",
                "🔧 Follows most customer instructions with minor issues.",
                "❌ Consistently ignores customer instructions.",
            ),
        ),
        graded(
            "house_deliveries",
            "House Deliveries",
            tiered(
                "✅ Doesn't get confused by stops with multiple locations.",
                "🔧 Sometimes gets confused by stops with multiple locations.",
                "❌ Doesn't understand stops with multiple locations and risks deliverying to the wrong houses/addresses.",
            ),
        ),
        graded(
            "building_deliveries",
            "Building Deliveries",
            tiered(
                "✅ Understands how to handle building deliveries: door to door, package rooms, receptionists.",
                "🔧 Needs more practice with building deliveries.",
                "❌ Dislikes building deliveries and complains about having to go upstairs door to door.",
            ),
        ),
        graded(
            "delivery_speed",
            "Delivery Speed",
            tiered(
                "✅ Delivers quickly: photo and go.",
                "🔧 Delivery speed is average; some extra time at stops.",
                "❌ Delivers slowly; spends extra time at stops.",
            ),
        ),
        graded(
            "identify_addresses",
            "Identify Addresses",
            tiered(
                "✅ Identifies the correct addresses without difficulty.",
                "🔧 Occasionally struggles with identifying the correct addresses.",
                "❌ Constantly struggles with identifying the correct addresses.",
            ),
        ),
        graded(
            "gps",
            "Map/GPS Skills",
            tiered(
                "✅ Good map/GPS skills.",
                "🔧 Needs improvement on map/GPS skills.",
                "❌ Poor map/GPS skills.",
            ),
        ),
        graded(
            "mark_undeliverable",
            "Undeliverable Packages",
            tiered(
                "✅ Knows how to mark undeliverable packages correctly (e.g., damage, missing, business closed).",
                "🔧 Needs some guidance on marking undeliverable packages.",
                "❌ Doesn't know how to mark a package as undeliverable or attempted.",
            ),
        ),
        graded(
            "parking",
            "Proper Parking Sequence",
            tiered(
                "✅ Knows and follows the proper parking sequence.",
                "🔧 Occasionally misses the proper parking sequence.",
                "❌ Ignores the proper parking sequence or seems reluctant to learn it.",
            ),
        ),
        graded(
            "handled_challenges",
            "Special Deliveries Experience",
            vec![
                plain(
                    "good",
                    "✅ Had the chance to experience special deliveries (lockers or OTP deliveries).",
                ),
                plain("mid", "🔧 Did not experience special deliveries."),
            ],
        ),
        graded(
            "gas_card",
            "Gas Card & Powered by Amazon App",
            tiered(
                "✅ Knows how to use the gas card and Powered by Amazon app.",
                "🔧 Needs more guidance on using the gas card and Powered by Amazon app.",
                "❌ Didn't get the chance to use the gas card and Powered by Amazon app.",
            ),
        ),
        graded(
            "time_card",
            "Timecard Editing",
            tiered(
                "✅ Knows how to edit timecard and meal period times.",
                "🔧 Needs more guidance on editing timecard and meal period times.",
                "❌ Struggles to edit timecard and meal period times.",
            ),
        ),
        graded("polite", "Customer Treatment", polite_options),
        graded(
            "language",
            "Language Challenges",
            tiered(
                "✅ No language challenges noted.",
                "🔧 Minor language challenges.",
                "❌ Language Barrier.",
            ),
        ),
        QuestionDefinition::single(
            "driver_feeling",
            "Driver Feelings",
            "Driver Feelings",
            ReportRole::DriverFeeling,
            vec![
                plain("overwhelmed", "😵‍💫 Feels overwhelmed about the job."),
                plain("happy", "😊 Feels happy about the job."),
                plain("confident", "💪 Feels confident about the job."),
                plain("challenged", "🏆 Feels challenged in a positive way."),
                plain("good_mental", "👍 Good mindset and attitude."),
                plain("bad_mental", "👎 Bad mindset/ poor attitude."),
            ],
        ),
        QuestionDefinition::single(
            "overall_comment",
            "Overall Comment",
            "Overall Comment",
            ReportRole::OverallComment,
            vec![
                plain("killed_it", "🔥 Killed it today"),
                plain("struggled", "🙈 Struggled today"),
                plain("had_easy", "😎 Had it easy today"),
                plain("pushed_through", "🫡 Pushed through it today"),
                plain("did_amazing", "🤩 Did amazing today"),
                plain("had_fun", "🤪 Had fun today"),
                plain("did_crazy", "🥶 Did crazy good today"),
                plain("overwhelmed_today", "🫨 Overwhelmed today"),
                plain("did_good", "🤘🏼 Did good today"),
            ],
        ),
        QuestionDefinition::multiple(
            "first_day_issues",
            "First Day Experience Issues",
            "First Day Experience Issues (Select all that apply)",
            ReportRole::DayIssues,
            vec![
                plain("morning_van_issues", "⚠️ Faced issues with the van."),
                plain("equipment_issues", "⚠️ Faced issues with equipment (phone, etc.)."),
                plain(
                    "route_issues",
                    "⚠️ Faced issues with the route (awful route, bad sequencing, etc.).",
                ),
                plain("only_buildings", "⚠️ Had an only buildings route."),
                plain("not_nursery", "⚠️ Had to do a non-nursery route on the first day."),
                plain("custom_issue", "⚠️ Other issue (describe below)"),
            ],
        )
        .with_free_text("Describe the issue", "custom-issue", "custom_issue"),
        QuestionDefinition::single(
            "feels_ready",
            "Driver Confidence",
            "Does the driver feel ready and confident to go solo?",
            ReportRole::DriverReadiness,
            vec![
                plain("yes", "🥶 Driver feels ready and confident to go solo next day")
                    .with_narrative(DRIVER_READY),
                plain("no", "😟 Driver doesn't feel ready or confident to go alone yet")
                    .with_narrative(DRIVER_NOT_READY),
            ],
        ),
        QuestionDefinition::single(
            "training_needed",
            "Training Readiness",
            "According to you, is the trainee ready to go solo?",
            ReportRole::TrainerReadiness,
            vec![
                plain("yes", "🙂‍↕️ Trainer recommends to let the driver go solo next day")
                    .with_narrative(TRAINER_READY),
                plain("one_more", "☝🏻 Trainer recommends one more ride-along")
                    .with_narrative(TRAINER_ONE_MORE),
                plain(
                    "multiple_more",
                    "🤯 Trainer says multiple additional ride-alongs needed",
                )
                .with_narrative(TRAINER_MULTIPLE_MORE),
            ],
        ),
        QuestionDefinition::single(
            "more_details",
            "Report Accuracy",
            "Is the report accurate enough or do you have more details available?",
            ReportRole::ReportAccuracy,
            vec![
                plain("yes", "Yes - Report is accurate enough"),
                plain("no", "No - More details available"),
            ],
        ),
    ]
}
