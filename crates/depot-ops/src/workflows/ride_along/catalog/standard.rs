use super::{CatalogProfile, CatalogVariant, ExclusivePair, QuestionCatalog};
use crate::workflows::ride_along::domain::{
    AnswerOption, QuestionDefinition, ReportRole, SubjectRole,
};

pub(super) const VAN_COACHING: &str =
    "Please help organize the van on the launchpad next working day.";

pub(super) const DRIVER_READY: &str = "🥶 Driver feels ready and confident to go solo next day.";
pub(super) const DRIVER_NOT_READY: &str =
    "😟 Driver doesn't feel ready or confident to go alone yet.";
pub(super) const TRAINER_READY: &str = "🙂‍↕️ Trainer recommends letting driver go solo next day.";
pub(super) const TRAINER_ONE_MORE: &str = "☝🏻 Trainer recommends one more ride-along.";
pub(super) const TRAINER_MULTIPLE_MORE: &str =
    "🤯 Trainer recommends multiple additional ride-alongs.";

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog {
        profile: CatalogProfile {
            name: CatalogVariant::Standard.as_str().to_string(),
            subject_roles: vec![SubjectRole::Trainee],
            scoring: true,
            keeps_history: false,
        },
        questions: questions(),
        exclusive_pairs: vec![ExclusivePair::new(
            "trainer_compliments",
            "quick_learner",
            "slow_learner",
        )],
    }
}

fn tiered(good: &'static str, mid: &'static str, bad: &'static str) -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("good", good, 5),
        AnswerOption::new("mid", mid, 3),
        AnswerOption::new("bad", bad, 1),
    ]
}

fn graded(id: &'static str, title: &'static str, options: Vec<AnswerOption>) -> QuestionDefinition {
    QuestionDefinition::single(id, title, title, ReportRole::Graded, options).scored()
}

fn questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::single(
            "coached",
            "Emergency Ride-Along",
            "Was this an emergency interruption during the driver's route?",
            ReportRole::EmergencyFlag,
            vec![
                AnswerOption::new("yes", "Yes - Emergency interruption required", 0),
                AnswerOption::new("no", "No - Regular scheduled ride-along", 0),
            ],
        )
        .with_free_text("How many stops was the driver behind?", "stops-behind", "yes"),
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
                "✅ Mastered deliverying to houses and stops with multiple locations are no problem.",
                "🔧 Minor difficulty with house deliveries; gets confused by stops with multiple locations.",
                "❌ Doesn't understand stops with multiple locations. risks deliverying to the wrong houses/addresses.",
            ),
        ),
        graded(
            "building_deliveries",
            "Building Deliveries",
            tiered(
                "✅ Understands how to handle building deliveries: door to door, package rooms, receptionists.",
                "🔧 Didn't experience building deliveries today.(might need coaching on that).",
                "❌ Hates apartment buildings; complains about having to go upstairs door to door.",
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
                "❌ Didn't have the chance to learn the proper parking sequence.",
            ),
        ),
        // Reported with the other skills but never scored.
        QuestionDefinition::single(
            "handled_challenges",
            "Special Deliveries Experience",
            "Special Deliveries Experience",
            ReportRole::Graded,
            vec![
                AnswerOption::new(
                    "good",
                    "✅ Had the chance to experience special deliveries (lockers or OTP deliveries).",
                    5,
                ),
                AnswerOption::new(
                    "mid",
                    "🔧 Did not experience special deliveries (Might need guidance on lockers or OTP deliveries).",
                    3,
                ),
            ],
        ),
        graded(
            "gas_card",
            "Gas Card & Powered by Amazon App",
            tiered(
                "✅ Knows how to use the gas card and Powered by Amazon app.",
                "🔧 Needs more guidance on using the gas card and Powered by Amazon app.",
                "❌ Does not know how to use the gas card and Powered by Amazon app.",
            ),
        ),
        graded(
            "time_card",
            "Timecard Editing",
            tiered(
                "✅ Knows how to edit timecard and meal period times.",
                "🔧 Needs more guidance on editing timecard and meal period times.",
                "❌ Does not know how to edit timecard and meal period times.",
            ),
        ),
        graded(
            "polite",
            "Customer Treatment",
            vec![
                AnswerOption::new("good", "✅ Polite and respectful with customers.", 5),
                AnswerOption::new("bad", "❌ Not always polite or respectful with customers.", 1),
            ],
        ),
        graded(
            "language",
            "Language Challenges",
            tiered(
                "✅ No language challenges noted.",
                "🔧 Minor language challenges.",
                "❌ Language Barrier.",
            ),
        ),
        QuestionDefinition::multiple(
            "trainer_compliments",
            "Trainer Feedback",
            "Trainer Feedback (Select all that apply)",
            ReportRole::TrainerFeedback,
            vec![
                AnswerOption::new("quick_learner", "✅ Quick learner", 5),
                AnswerOption::new("positive_attitude", "✅ Very positive attitude", 5),
                AnswerOption::new("great_effort", "✅ Showed great effort and determination", 5),
                AnswerOption::new("good_communication", "✅ Good communication skills", 4),
                AnswerOption::new("reliable", "✅ Reliable and consistent", 4),
                AnswerOption::new("adaptable", "✅ Adaptable to changing situations", 4),
                AnswerOption::new("slow_learner", "🔧 Takes time to learn new concepts", 3),
                AnswerOption::new("other_compliment", "🦋 Other compliment", 5),
                AnswerOption::new("communication_issues", "🔧 Struggles to communicate", 2),
                AnswerOption::new("unreliable", "❌ Unreliable or inconsistent performance", 1),
                AnswerOption::new("negative_attitude", "❌ Negative attitude or reluctant to learn", 1),
                AnswerOption::new("lazy", "❌ Seems lazy or unmotivated", 1),
            ],
        )
        .with_free_text("Describe the compliment", "other-compliment", "other_compliment"),
        QuestionDefinition::single(
            "driver_feeling",
            "Driver Feelings",
            "Driver Feelings",
            ReportRole::DriverFeeling,
            vec![
                AnswerOption::new("overwhelmed", "😵‍💫 Feels overwhelmed about the job.", 1),
                AnswerOption::new("happy", "😊 Feels happy about the job.", 5),
                AnswerOption::new("confident", "💪 Feels confident about the job.", 5),
                AnswerOption::new("challenged", "🏆 Feels challenged in a positive way.", 4),
                AnswerOption::new("good_mental", "👍 Good mindset and attitude.", 5),
                AnswerOption::new("bad_mental", "👎 Bad mindset/ poor attitude.", 1),
            ],
        )
        .scored(),
        QuestionDefinition::single(
            "overall_comment",
            "Overall Comment",
            "Overall Comment",
            ReportRole::OverallComment,
            vec![
                AnswerOption::new("killed_it", "🔥 Killed it today", 5),
                AnswerOption::new("struggled", "🙈 Struggled today", 2),
                AnswerOption::new("had_easy", "😎 Had it easy today", 3),
                AnswerOption::new("pushed_through", "🫡 Pushed through it today", 4),
                AnswerOption::new("did_amazing", "🤩 Did amazing today", 5),
                AnswerOption::new("had_fun", "🤪 Had fun today", 4),
                AnswerOption::new("did_crazy", "🥶 Did crazy good today", 5),
                AnswerOption::new("overwhelmed_today", "🫨 Overwhelmed today", 1),
                AnswerOption::new("did_good", "🤘🏼 Did good today", 4),
            ],
        )
        .scored(),
        QuestionDefinition::multiple(
            "first_day_issues",
            "First Day Experience Issues",
            "First Day Experience Issues (Select all that apply)",
            ReportRole::DayIssues,
            vec![
                AnswerOption::new("morning_van_issues", "⚠️ Faced issues with the van.", 0),
                AnswerOption::new(
                    "equipment_issues",
                    "⚠️ Faced issues with equipment (phone, etc.).",
                    0,
                ),
                AnswerOption::new(
                    "route_issues",
                    "⚠️ Faced issues with the route (awful route, bad sequencing, etc.).",
                    0,
                ),
                AnswerOption::new("only_buildings", "⚠️ Had an only buildings route.", 0),
                AnswerOption::new(
                    "not_nursery",
                    "⚠️ Had to do a non-nursery route on the first day.",
                    0,
                ),
                AnswerOption::new("custom_issue", "⚠️ Other issue (describe below)", 0),
            ],
        )
        .with_free_text("Describe the issue", "custom-issue", "custom_issue"),
        QuestionDefinition::single(
            "experienced",
            "Prior Experience",
            "Does the driver have prior experience with Amazon or similar delivery routes?",
            ReportRole::Graded,
            vec![
                AnswerOption::new("yes", "Yes - Experienced from prior routes", 5),
                AnswerOption::new("no", "No - Zero experience as a carrier", 3),
            ],
        )
        .scored(),
        QuestionDefinition::single(
            "feels_ready",
            "Driver Confidence",
            "Does the driver feel ready and confident to go solo?",
            ReportRole::DriverReadiness,
            vec![
                AnswerOption::new("yes", "Yes - Ready and confident to go solo", 5)
                    .with_narrative(DRIVER_READY),
                AnswerOption::new("no", "No - Not confident going alone yet", 3)
                    .with_narrative(DRIVER_NOT_READY),
            ],
        )
        .scored(),
        QuestionDefinition::single(
            "training_needed",
            "Training Readiness",
            "According to you, is the trainee ready to go solo?",
            ReportRole::TrainerReadiness,
            vec![
                AnswerOption::new("yes", "Yes - Ready to go solo immediately", 5)
                    .with_narrative(TRAINER_READY),
                AnswerOption::new("one_more", "No - One more ride-along session needed", 3)
                    .with_narrative(TRAINER_ONE_MORE),
                AnswerOption::new("multiple_more", "No - Multiple additional sessions needed", 1)
                    .with_narrative(TRAINER_MULTIPLE_MORE),
            ],
        )
        .scored(),
        QuestionDefinition::single(
            "more_details",
            "Report Accuracy",
            "Is the report accurate enough or do you have more details available?",
            ReportRole::ReportAccuracy,
            vec![
                AnswerOption::new("yes", "Yes - Report is accurate enough", 5),
                AnswerOption::new("no", "No - More details available", 0),
            ],
        ),
    ]
}
