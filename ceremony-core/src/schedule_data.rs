//! Literal content for the example-schedule catalog.

use crate::plan::DayType::{PostWedding, PreWedding, Wedding};
use crate::schedules::{DaySchedule, ExampleSchedule, ScheduleEvent};
use crate::tradition::{Tradition, TraditionPair};

fn event(time: &str, duration: &str, name: &str, description: &str) -> ScheduleEvent {
    ScheduleEvent::new(time, duration, name, description)
}

// ============================================================================
// Single tradition
// ============================================================================

pub(crate) fn single_tradition() -> Vec<(Tradition, ExampleSchedule)> {
    vec![
        (Tradition::Hinduism, hindu()),
        (Tradition::Christianity, christian()),
        (Tradition::Judaism, jewish()),
        (Tradition::Islam, muslim()),
    ]
}

fn hindu() -> ExampleSchedule {
    ExampleSchedule::new(
        "Hindu Wedding",
        "Traditional Hindu wedding with sacred rituals spread across multiple days",
    )
    .with_day(
        DaySchedule::new(
            1,
            "Mehendi & Sangeet",
            PreWedding,
            "Starting with mehendi and sangeet allows families to bond in a relaxed, joyful atmosphere before the formal ceremonies. It sets a celebratory tone while keeping pre-wedding stress manageable.",
        )
        .with_event(
            event("2:00 PM", "3 hours", "Mehendi Ceremony", "Henna application for bride, bridesmaids, and female guests")
                .with_significance("The darker the mehendi, the stronger the love between bride and groom")
                .with_tips(&[
                    "Book professional mehendi artists 2-3 months in advance",
                    "Set up a comfortable seating area with cushions",
                    "Provide refreshments and entertainment",
                ]),
        )
        .with_event(
            event("7:00 PM", "4 hours", "Sangeet Night", "Musical evening with dance performances and celebrations")
                .with_significance("Brings both families together through music and joy")
                .with_tips(&[
                    "Choreograph performances 1-2 months ahead",
                    "Mix traditional and modern songs",
                    "Have a good sound system and DJ",
                ]),
        ),
    )
    .with_day(
        DaySchedule::new(
            2,
            "Haldi & Ganesh Puja",
            PreWedding,
            "Haldi in the morning gives the turmeric paste time to work its magic. Evening family dinner provides emotional grounding before the big day.",
        )
        .with_event(
            event("9:00 AM", "1.5 hours", "Ganesh Puja", "Invoking Lord Ganesh for blessings and obstacle removal")
                .with_significance("Ensures a smooth wedding ceremony without obstacles")
                .with_tips(&[
                    "Arrange a small mandap or altar",
                    "Have fresh flowers and fruits ready",
                    "Invite close family for intimate blessings",
                ]),
        )
        .with_event(
            event("11:00 AM", "2 hours", "Haldi Ceremony", "Turmeric paste applied to bride and groom separately")
                .with_significance("Purifies and beautifies the couple, brings glow to skin")
                .with_tips(&[
                    "Wear clothes you don't mind staining yellow",
                    "Set up outdoor if possible for easy cleanup",
                    "Have towels and water ready",
                ]),
        )
        .with_event(
            event("7:00 PM", "2 hours", "Family Dinner", "Intimate dinner with immediate family")
                .with_significance("Last meal as unmarried individuals with their families"),
        ),
    )
    .with_day(
        DaySchedule::new(
            3,
            "Wedding Day",
            Wedding,
            "Morning muhurat (auspicious time) is ideal for Hindu ceremonies. The schedule flows naturally from ceremony to celebration to emotional farewell.",
        )
        .with_event(
            event("6:00 AM", "1 hour", "Bride/Groom Preparation", "Getting ready with help from family and friends")
                .with_tips(&[
                    "Have a light breakfast",
                    "Start makeup/grooming early",
                    "Take moments to breathe and enjoy",
                ]),
        )
        .with_event(
            event("9:00 AM", "1 hour", "Baraat Arrival", "Groom arrives with family in grand procession")
                .with_significance("Traditional welcome of the groom by bride's family")
                .with_tips(&[
                    "Arrange horse or vintage car in advance",
                    "Coordinate with DJ for high-energy music",
                    "Prepare for milni ceremony",
                ]),
        )
        .with_event(
            event(
                "10:30 AM",
                "2.5 hours",
                "Main Wedding Ceremony",
                "Sacred rituals including Kanyadaan, Saptapadi (7 vows), and Sindoor application",
            )
            .with_significance("The most sacred part where couple becomes legally married")
            .with_tips(&[
                "Work with priest on timing",
                "Have a coordinator to guide family",
                "Ensure mandap is decorated beautifully",
            ]),
        )
        .with_event(event("1:00 PM", "2 hours", "Wedding Lunch", "Elaborate buffet for all guests"))
        .with_event(
            event("3:00 PM", "1 hour", "Vidaai", "Emotional farewell as bride leaves with groom")
                .with_significance("Bride says goodbye to her family and begins new life")
                .with_tips(&[
                    "Have tissues ready for emotional moments",
                    "Decorate the car beautifully",
                    "Brief family on traditions",
                ]),
        ),
    )
    .with_day(
        DaySchedule::new(
            4,
            "Reception",
            PostWedding,
            "Reception on a separate day keeps guests fresh and energized. Evening timing is perfect for dancing and celebration without exhaustion from morning ceremonies.",
        )
        .with_event(event("6:00 PM", "1 hour", "Guest Arrival & Cocktails", "Guests arrive and mingle with drinks and appetizers"))
        .with_event(
            event("7:00 PM", "30 minutes", "Couple's Grand Entrance", "Newlyweds make their first appearance as married couple")
                .with_tips(&[
                    "Choose a dramatic entrance song",
                    "Coordinate lighting and fog effects",
                    "Have photographer ready",
                ]),
        )
        .with_event(event("7:30 PM", "1 hour", "Dinner Service", "Formal sit-down dinner or elaborate buffet"))
        .with_event(event("8:30 PM", "30 minutes", "Speeches & Toasts", "Parents, best man, maid of honor share memories and wishes"))
        .with_event(event("9:00 PM", "15 minutes", "First Dance", "Couple's first dance followed by parent dances"))
        .with_event(
            event("9:15 PM", "2 hours", "Open Dancing", "Dance floor opens for all guests").with_tips(&[
                "Mix Bollywood and Western songs",
                "Take requests throughout",
                "Keep energy high with good transitions",
            ]),
        )
        .with_event(event("11:15 PM", "15 minutes", "Cake Cutting", "Traditional cake cutting ceremony"))
        .with_event(event("11:30 PM", "30 minutes", "Send-Off", "Sparkler send-off or grand finale")),
    )
}

fn christian() -> ExampleSchedule {
    ExampleSchedule::new("Christian Wedding", "Traditional Christian wedding celebration")
        .with_day(
            DaySchedule::new(
                1,
                "Rehearsal Dinner",
                PreWedding,
                "Rehearsal dinner the night before ensures smooth ceremony execution while keeping the pre-wedding celebration manageable and intimate.",
            )
            .with_event(
                event("5:00 PM", "1 hour", "Ceremony Rehearsal", "Practice ceremony proceedings at the church/venue")
                    .with_significance("Ensures everyone knows their roles and timing")
                    .with_tips(&[
                        "Have all participants arrive on time",
                        "Walk through processional and recessional",
                        "Practice readings and vows",
                    ]),
            )
            .with_event(
                event("7:00 PM", "3 hours", "Rehearsal Dinner", "Intimate dinner hosted by groom's family")
                    .with_significance("Thanks wedding party and celebrates upcoming union")
                    .with_tips(&[
                        "Keep it intimate - wedding party and close family",
                        "Have a few short speeches",
                        "Present gifts to wedding party",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Wedding Day",
                Wedding,
                "Afternoon ceremony provides perfect lighting for photos. Having cocktail hour during couple photos keeps guests entertained. Evening flow from dinner to dancing feels natural.",
            )
            .with_event(
                event("9:00 AM", "2 hours", "Getting Ready", "Hair, makeup, and dressing with wedding party").with_tips(&[
                    "Eat a good breakfast",
                    "Have champagne and snacks ready",
                    "Allow time for photos while getting ready",
                ]),
            )
            .with_event(
                event("11:00 AM", "1 hour", "First Look & Couple Photos", "Private moment for couple to see each other (optional)")
                    .with_significance("Allows emotional moment away from crowds"),
            )
            .with_event(
                event("2:00 PM", "1 hour", "Church Ceremony", "Traditional Christian ceremony with vows, rings, and pronouncement")
                    .with_significance("Sacred covenant before God")
                    .with_tips(&[
                        "Arrive 30 minutes early",
                        "Have a wedding coordinator",
                        "Ensure officiant has marriage license",
                    ]),
            )
            .with_event(event("3:00 PM", "1 hour", "Cocktail Hour", "Drinks and appetizers while couple takes photos"))
            .with_event(event("4:00 PM", "1 hour", "Reception Entrance & First Dances", "Grand entrance, first dance, parent dances"))
            .with_event(event("5:00 PM", "1.5 hours", "Dinner", "Served dinner with toasts and speeches"))
            .with_event(event("6:30 PM", "30 minutes", "Cake Cutting", "Traditional cake cutting and serving"))
            .with_event(
                event("7:00 PM", "3 hours", "Dancing & Celebration", "Open dance floor with DJ or band").with_tips(&[
                    "Include bouquet and garter toss",
                    "Take breaks to visit with guests",
                    "Save energy for last dance",
                ]),
            )
            .with_event(event("10:00 PM", "15 minutes", "Grand Exit", "Sparkler send-off or bubble exit")),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Post-Wedding Brunch",
                PostWedding,
                "Morning brunch gives out-of-town guests one more celebration before traveling home. Relaxed atmosphere allows meaningful conversations that weren't possible during busy wedding day.",
            )
            .with_event(
                event("11:00 AM", "2 hours", "Farewell Brunch", "Casual brunch with guests before they depart")
                    .with_significance("One last gathering to thank guests and say goodbye")
                    .with_tips(&[
                        "Keep it casual and relaxed",
                        "Display wedding photos from previous day",
                        "Provide hangover-friendly food options",
                    ]),
            ),
        )
}

fn jewish() -> ExampleSchedule {
    ExampleSchedule::new("Jewish Wedding", "Traditional Jewish wedding with sacred customs")
        .with_day(
            DaySchedule::new(
                1,
                "Aufruf & Pre-Wedding",
                PreWedding,
                "Aufruf honors tradition while pre-wedding celebration brings families together in relaxed setting.",
            )
            .with_event(
                event("9:00 AM", "1 hour", "Aufruf", "Groom called to Torah at Shabbat service (if Saturday wedding)")
                    .with_significance("Blessing groom before wedding"),
            )
            .with_event(event("7:00 PM", "2 hours", "Pre-Wedding Celebration", "Casual gathering of families")),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Wedding Day",
                Wedding,
                "Late afternoon ceremony provides beautiful lighting. Yichud gives couple essential private moment. Hora immediately after entrance sets joyful, energetic tone for celebration.",
            )
            .with_event(
                event("4:00 PM", "30 minutes", "Ketubah Signing", "Jewish marriage contract signed by witnesses")
                    .with_significance("Legal and spiritual foundation of marriage")
                    .with_tips(&[
                        "Have ketubah displayed beautifully",
                        "Ensure two witnesses present",
                        "Take photos of signing",
                    ]),
            )
            .with_event(
                event("4:30 PM", "30 minutes", "Bedeken", "Groom veils bride")
                    .with_significance("Ensures groom marries correct bride (biblical reference)"),
            )
            .with_event(
                event("5:00 PM", "45 minutes", "Chuppah Ceremony", "Wedding ceremony under chuppah with seven blessings")
                    .with_significance("Most sacred part of Jewish wedding")
                    .with_tips(&[
                        "Choose meaningful chuppah design",
                        "Select readers for seven blessings",
                        "Have glass ready for breaking",
                    ]),
            )
            .with_event(
                event("5:45 PM", "15 minutes", "Yichud", "Couple spends private time together")
                    .with_significance("First moments as married couple"),
            )
            .with_event(event("6:00 PM", "1 hour", "Cocktail Hour", "Guests enjoy drinks and hors d'oeuvres"))
            .with_event(
                event("7:00 PM", "30 minutes", "Grand Entrance & Hora", "Traditional hora dance with chair lifting")
                    .with_significance("Joyful celebration of new marriage"),
            )
            .with_event(event("7:30 PM", "1.5 hours", "Dinner", "Served dinner with toasts"))
            .with_event(
                event("9:00 PM", "2.5 hours", "Dancing & Celebration", "Traditional and modern dancing").with_tips(&[
                    "Mix traditional Jewish music with modern",
                    "Encourage participation in group dances",
                ]),
            )
            .with_event(event("11:30 PM", "30 minutes", "Dessert & Send-Off", "Late-night sweets and farewell")),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Sheva Brachot",
                PostWedding,
                "Sheva brachot extends joy of wedding week while honoring important tradition. Provides opportunity for meaningful connections that may have been missed during busy wedding.",
            )
            .with_event(
                event("6:00 PM", "3 hours", "Sheva Brachot Dinner", "Post-wedding meal with seven blessings repeated")
                    .with_significance("Continues celebration for seven days after wedding")
                    .with_tips(&[
                        "Can host multiple sheva brachot with different groups",
                        "Keep it intimate with close friends/family",
                    ]),
            ),
        )
}

fn muslim() -> ExampleSchedule {
    ExampleSchedule::new("Muslim Wedding", "Traditional Islamic wedding ceremonies")
        .with_day(
            DaySchedule::new(
                1,
                "Mehndi Night",
                PreWedding,
                "Mehndi night allows female family members and friends to bond. Dark henna has time to develop before wedding day.",
            )
            .with_event(
                event("6:00 PM", "4 hours", "Mehndi Ceremony", "Henna application with music and celebration")
                    .with_significance("Blessing bride with beauty and good fortune")
                    .with_tips(&[
                        "Book professional henna artists",
                        "Arrange comfortable seating",
                        "Play traditional music",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Nikah Day",
                Wedding,
                "Morning nikah follows sunnah. Break between ceremonies prevents exhaustion. Evening walima allows grand celebration without compromising religious observance.",
            )
            .with_event(
                event("10:00 AM", "1 hour", "Nikah Ceremony", "Islamic marriage contract signing with imam")
                    .with_significance("Religious and legal marriage contract")
                    .with_tips(&[
                        "Have witnesses present",
                        "Agree on mahr (dowry) beforehand",
                        "Ensure imam knows ceremony preferences",
                    ]),
            )
            .with_event(event("12:00 PM", "2 hours", "Lunch Reception", "Celebration meal with family and friends"))
            .with_event(event("3:00 PM", "2 hours", "Rest & Preparation", "Break before evening celebration"))
            .with_event(
                event("6:00 PM", "4 hours", "Walima Reception", "Formal wedding reception hosted by groom's family")
                    .with_significance("Announcement of marriage to community")
                    .with_tips(&[
                        "Arrange gender-separated seating if traditional",
                        "Provide halal catering",
                        "Include nasheed or appropriate music",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Valima Continuation",
                PostWedding,
                "Extended walima honors Islamic principle of community celebration while accommodating large guest lists across multiple days.",
            )
            .with_event(
                event("7:00 PM", "3 hours", "Extended Walima", "Additional reception for those who couldn't attend")
                    .with_significance("Ensuring all community members can celebrate"),
            ),
        )
}

// ============================================================================
// Interfaith
// ============================================================================

pub(crate) fn interfaith() -> Vec<(TraditionPair, ExampleSchedule)> {
    vec![
        (Tradition::Hinduism, Tradition::Christianity, hindu_christian()),
        (Tradition::Hinduism, Tradition::Judaism, hindu_jewish()),
        (Tradition::Christianity, Tradition::Islam, christian_muslim()),
        (Tradition::Hinduism, Tradition::Islam, hindu_muslim()),
    ]
    .into_iter()
    .filter_map(|(a, b, schedule)| TraditionPair::new(a, b).map(|pair| (pair, schedule)))
    .collect()
}

fn hindu_christian() -> ExampleSchedule {
    ExampleSchedule::new("Hindu & Christian", "Blended ceremony honoring both traditions")
        .with_day(
            DaySchedule::new(
                1,
                "Mehendi & Rehearsal",
                PreWedding,
                "Combines Hindu mehendi with Christian rehearsal dinner, giving both families meaningful pre-wedding traditions to participate in.",
            )
            .with_event(event("2:00 PM", "3 hours", "Mehendi Ceremony", "Traditional henna application"))
            .with_event(event("6:00 PM", "2 hours", "Rehearsal Dinner", "Christian tradition rehearsal with both families")),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Sangeet & Welcome Party",
                PreWedding,
                "Sangeet provides perfect platform for cultural exchange through music and dance, breaking down barriers between families.",
            )
            .with_event(
                event("7:00 PM", "4 hours", "Sangeet Night", "Musical celebration with performances from both cultures")
                    .with_tips(&[
                        "Mix Bollywood and Western songs",
                        "Have joint family performances",
                        "Educate guests about both traditions",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Wedding Day - Dual Ceremonies",
                Wedding,
                "Separate morning and afternoon ceremonies give full honor to each tradition without rushing. Joint reception in evening celebrates unified future.",
            )
            .with_event(
                event("9:00 AM", "2.5 hours", "Hindu Ceremony", "Traditional Hindu wedding with key rituals")
                    .with_significance("Honors Hindu traditions including saptapadi")
                    .with_tips(&[
                        "Brief Christian family on Hindu customs",
                        "Provide ceremony program with explanations",
                        "Consider shortened version of full ceremony",
                    ]),
            )
            .with_event(event("12:00 PM", "1.5 hours", "Lunch Break", "Light lunch and change of outfits"))
            .with_event(
                event("2:00 PM", "1 hour", "Christian Ceremony", "Church ceremony with vows and rings")
                    .with_significance("Honors Christian traditions")
                    .with_tips(&[
                        "Have Hindu elements explained to Christian guests",
                        "Consider interfaith officiant",
                        "Include readings from both traditions",
                    ]),
            )
            .with_event(
                event("4:00 PM", "6 hours", "Joint Reception", "Celebration incorporating both cultures").with_tips(&[
                    "Mix cuisines from both cultures",
                    "Play variety of music",
                    "Include traditions from both (cake cutting AND ceremonial rituals)",
                ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                4,
                "Farewell Brunch",
                PostWedding,
                "Casual brunch allows families to bond after experiencing both traditions, fostering understanding and unity.",
            )
            .with_event(event("11:00 AM", "2 hours", "Post-Wedding Brunch", "Relaxed gathering with both families")),
        )
        .with_why_effective(
            "This schedule respects both traditions equally, educates families about each culture, and creates opportunities for meaningful cross-cultural bonding. Two separate ceremonies prevent compromising either tradition while joint celebrations emphasize unity.",
        )
}

fn hindu_jewish() -> ExampleSchedule {
    ExampleSchedule::new("Hindu & Jewish", "Beautiful blend of ancient traditions")
        .with_day(
            DaySchedule::new(
                1,
                "Mehendi & Ketubah",
                PreWedding,
                "Combining mehendi and ketubah signing shows respect for both ancient traditions of preparation and commitment.",
            )
            .with_event(event("3:00 PM", "2 hours", "Mehendi Ceremony", "Henna application for bride and family"))
            .with_event(
                event("6:00 PM", "1 hour", "Ketubah Signing", "Jewish marriage contract signing ceremony").with_tips(&[
                    "Display both Hindu and Jewish symbolism",
                    "Have rabbi and pandit present",
                    "Create interfaith ketubah with Hindu elements",
                ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Sangeet & Celebration",
                PreWedding,
                "Music and dance transcend cultural barriers, allowing families to celebrate together through joy.",
            )
            .with_event(
                event("7:00 PM", "4 hours", "Sangeet with Hora", "Musical evening incorporating both traditions").with_tips(&[
                    "Include hora dance and Bollywood performances",
                    "Mix klezmer and Indian music",
                    "Celebrate both cultures through dance",
                ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Wedding Day - Combined Ceremony",
                Wedding,
                "Combined ceremony creates something beautiful and unique rather than feeling like two separate weddings. Guests experience seamless blend of ancient wisdom from both traditions.",
            )
            .with_event(
                event("10:00 AM", "3 hours", "Interfaith Ceremony", "Ceremony combining Hindu mandap and Jewish chuppah")
                    .with_significance("Unified ceremony under decorated mandap-chuppah")
                    .with_tips(&[
                        "Create hybrid mandap-chuppah structure",
                        "Have both rabbi and pandit officiate",
                        "Include saptapadi (7 steps) and sheva brachot (7 blessings)",
                        "Break glass AND circle sacred fire",
                        "Provide detailed program explaining each ritual",
                    ]),
            )
            .with_event(event("1:00 PM", "1 hour", "Yichud & Private Time", "Private moments for newlyweds"))
            .with_event(
                event("2:00 PM", "6 hours", "Reception with Both Traditions", "Celebration incorporating Hindu and Jewish customs")
                    .with_tips(&[
                        "Serve fusion menu with kosher and Indian options",
                        "Include hora AND traditional Indian dances",
                        "Display elements from both cultures in decor",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                4,
                "Sheva Brachot Brunch",
                PostWedding,
                "Continuing celebration honors Jewish tradition while including Hindu family in extended festivities.",
            )
            .with_event(event("11:00 AM", "3 hours", "Post-Wedding Celebration", "Sheva brachot-style gathering with both families")),
        )
        .with_why_effective(
            "This interfaith approach creates hybrid rituals that honor core elements of both traditions. The combined ceremony demonstrates that two ancient cultures can beautifully coexist, creating something meaningful for future generations.",
        )
}

fn christian_muslim() -> ExampleSchedule {
    ExampleSchedule::new("Christian & Muslim", "Respectful blend of Abrahamic faiths")
        .with_day(
            DaySchedule::new(
                1,
                "Mehndi & Rehearsal",
                PreWedding,
                "Combines pre-wedding traditions from both faiths, establishing respect and understanding from the start.",
            )
            .with_event(event("3:00 PM", "3 hours", "Mehndi Ceremony", "Islamic tradition henna application"))
            .with_event(
                event("7:00 PM", "2 hours", "Rehearsal Dinner", "Christian tradition with both families").with_tips(&[
                    "Serve halal options",
                    "Brief families on both traditions",
                    "Foster understanding and respect",
                ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Dual Ceremonies",
                Wedding,
                "Two separate ceremonies ensure both faiths are fully honored. Starting with nikah respects Islamic timing while Christian ceremony provides familiar tradition for that family.",
            )
            .with_event(
                event("10:00 AM", "1 hour", "Nikah Ceremony", "Islamic marriage contract with imam").with_tips(&[
                    "Hold at mosque or neutral venue",
                    "Provide explanation for Christian guests",
                    "Ensure mahr is agreed upon",
                ]),
            )
            .with_event(event("12:00 PM", "1.5 hours", "Lunch Break", "Time to rest and change"))
            .with_event(
                event("2:00 PM", "1 hour", "Christian Ceremony", "Church ceremony with pastor").with_tips(&[
                    "Find interfaith-friendly church",
                    "Include readings from both scriptures",
                    "Emphasize common values of faith and family",
                ]),
            )
            .with_event(
                event("4:00 PM", "5 hours", "Walima Reception", "Evening celebration following Islamic tradition")
                    .with_tips(&[
                        "Serve halal food for all",
                        "Consider gender-appropriate celebrations",
                        "Include traditions from both (cake, dances, etc.)",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Extended Celebration",
                PostWedding,
                "Extended walima honors Islamic tradition while giving opportunity for those who couldn't attend earlier ceremonies to celebrate.",
            )
            .with_event(event("6:00 PM", "3 hours", "Extended Walima", "Additional reception for extended community")),
        )
        .with_why_effective(
            "Separate ceremonies respect each faith's requirements and sanctity. Shared celebrations emphasize common Abrahamic values of family, commitment, and love. Focuses on religious harmony and mutual respect.",
        )
}

fn hindu_muslim() -> ExampleSchedule {
    ExampleSchedule::new("Hindu & Muslim", "Harmonious blend of two rich ancient traditions")
        .with_day(
            DaySchedule::new(
                1,
                "Mehendi & Ganesh Puja",
                PreWedding,
                "Mehendi is a beautiful shared tradition between both cultures, creating immediate common ground. Starting with blessings from both traditions sets respectful tone.",
            )
            .with_event(
                event("10:00 AM", "1 hour", "Ganesh Puja", "Hindu ceremony invoking Lord Ganesh for blessings")
                    .with_significance("Removing obstacles and blessing the upcoming union")
                    .with_tips(&[
                        "Set up small mandap or altar",
                        "Have priest conduct brief ceremony",
                        "Welcome Muslim family to observe",
                    ]),
            )
            .with_event(
                event("3:00 PM", "4 hours", "Mehendi Ceremony", "Elaborate henna application ceremony")
                    .with_significance("Shared tradition in both Hindu and Muslim cultures")
                    .with_tips(&[
                        "Celebrate that both cultures cherish mehendi",
                        "Mix traditional music from both backgrounds",
                        "Create inclusive atmosphere for all guests",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                2,
                "Sangeet & Pre-Wedding Feast",
                PreWedding,
                "Music transcends religious boundaries. Combining Bollywood energy with Sufi devotional music creates magical cultural exchange that educates and entertains.",
            )
            .with_event(
                event("7:00 PM", "4 hours", "Sangeet with Qawwali", "Musical evening blending Bollywood and Sufi traditions")
                    .with_significance("Music as universal language bringing families together")
                    .with_tips(&[
                        "Include qawwali performances alongside Bollywood",
                        "Mix traditional and modern songs",
                        "Encourage both families to perform together",
                        "Create fusion dance performances",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                3,
                "Wedding Day - Dual Ceremonies",
                Wedding,
                "Morning nikah respects Islamic timing. Afternoon Hindu ceremony allows for proper auspicious muhurat. Separation between ceremonies gives each tradition full dignity without rushing. Joint reception celebrates unified future.",
            )
            .with_event(
                event("8:00 AM", "1 hour", "Haldi Ceremony", "Traditional Hindu turmeric blessing")
                    .with_significance("Purification and beautification before wedding")
                    .with_tips(&[
                        "Keep it intimate with close family",
                        "Brief Muslim family on significance",
                        "Set up for easy cleanup",
                    ]),
            )
            .with_event(
                event("10:00 AM", "1.5 hours", "Nikah Ceremony", "Islamic marriage contract with imam")
                    .with_significance("Religious and legal union in Islamic tradition")
                    .with_tips(&[
                        "Hold at mosque or neutral elegant venue",
                        "Ensure mahr is discussed and agreed",
                        "Provide program explaining nikah for Hindu guests",
                        "Have witnesses from both families",
                    ]),
            )
            .with_event(event("12:00 PM", "2 hours", "Lunch Break & Outfit Change", "Time to rest and change for Hindu ceremony"))
            .with_event(
                event("2:00 PM", "3 hours", "Hindu Wedding Ceremony", "Vedic ceremony under mandap with sacred rituals")
                    .with_significance("Sacred union with saptapadi and agni as witness")
                    .with_tips(&[
                        "Include key rituals: kanyadaan, saptapadi, sindoor",
                        "Provide explanations for Muslim guests",
                        "Consider shortened ceremony to respect all guests",
                        "Have pandit explain each ritual in English/Urdu",
                    ]),
            )
            .with_event(
                event("5:00 PM", "5 hours", "Grand Reception", "Evening celebration honoring both traditions")
                    .with_significance("United celebration of new beginning")
                    .with_tips(&[
                        "Serve fusion menu - biryani, chaat, and traditional Indian dishes",
                        "Ensure all food is halal",
                        "Mix Bollywood, qawwali, and contemporary music",
                        "Include traditions from both (cake cutting AND ceremonial rituals)",
                        "Create photo displays celebrating both cultures",
                    ]),
            ),
        )
        .with_day(
            DaySchedule::new(
                4,
                "Walima & Blessings",
                PostWedding,
                "Walima honors Islamic tradition of community celebration. Final blessing dinner brings both families together in intimate setting, strengthening bonds for future.",
            )
            .with_event(
                event("12:00 PM", "3 hours", "Walima Lunch", "Islamic tradition reception hosted by groom's family")
                    .with_significance("Formal announcement of marriage to community")
                    .with_tips(&[
                        "Serve elaborate halal feast",
                        "Welcome both Hindu and Muslim community",
                        "Keep atmosphere joyful and inclusive",
                    ]),
            )
            .with_event(
                event("7:00 PM", "2 hours", "Family Blessings Dinner", "Intimate gathering with immediate family")
                    .with_significance("Elders from both families bless the newlyweds"),
            ),
        )
        .with_why_effective(
            "This schedule honors both Hindu and Muslim traditions equally, using shared love of celebration, music, and family. Mehendi as common ground, separate religious ceremonies for full respect, and fusion celebrations that create something beautiful and new. Demonstrates that ancient traditions can coexist harmoniously.",
        )
}
