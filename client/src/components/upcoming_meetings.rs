//! Today and upcoming meetings block at the top of the plans feed.

use leptos::prelude::*;

use crate::data::types::ConfirmedMeeting;
use crate::state::meetings::MeetingGroups;

/// Renders nothing when there are no meetings.
#[component]
pub fn UpcomingMeetings(meetings: Vec<ConfirmedMeeting>) -> impl IntoView {
    let groups = MeetingGroups::split(&meetings);
    if groups.is_empty() {
        return ().into_any();
    }

    let today = (!groups.today.is_empty()).then(|| {
        let cards = groups.today.iter().cloned().map(|m| view! { <TodayMeeting meeting=m/> }).collect_view();
        view! {
            <section class="meetings__today">
                <h2 class="meetings__heading">"✨ Сейчас рядом"</h2>
                {cards}
            </section>
        }
    });
    let upcoming = (!groups.upcoming.is_empty()).then(|| {
        let rows = groups.upcoming.iter().cloned().map(|m| view! { <UpcomingRow meeting=m/> }).collect_view();
        view! {
            <section class="meetings__upcoming">
                <h3 class="meetings__subheading">"Скоро"</h3>
                {rows}
            </section>
        }
    });

    view! {
        <div class="meetings">
            {today}
            {upcoming}
        </div>
    }
    .into_any()
}

#[component]
fn TodayMeeting(meeting: ConfirmedMeeting) -> impl IntoView {
    let person = meeting.person;
    let compat = person.compatibility.map(|c| view! { <span class="meeting-hero__compat">{format!("{c}%")}</span> });
    view! {
        <div class="meeting-hero">
            <img class="meeting-hero__bg" src=person.photo.clone() alt=person.name.clone()/>
            <div class="meeting-hero__shade"></div>
            <span class="chip chip--pink meeting-hero__time">"🕒 Сегодня в " {meeting.time}</span>
            {compat}
            <div class="meeting-hero__info">
                <div class="meeting-hero__person">
                    <img class="avatar avatar--md" src=person.photo.clone() alt=person.name.clone()/>
                    <div>
                        <h3>{person.headline()}</h3>
                        <p>{person.bio.clone().unwrap_or_default()}</p>
                    </div>
                </div>
                <div class="meeting-hero__plan">
                    <span>{meeting.plan.category.icon()} " " {meeting.plan.title}</span>
                    <p>{meeting.plan.location}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn UpcomingRow(meeting: ConfirmedMeeting) -> impl IntoView {
    view! {
        <div class="meeting-row">
            <img class="avatar avatar--lg" src=meeting.person.photo.clone() alt=meeting.person.name.clone()/>
            <div class="meeting-row__body">
                <h4>{meeting.person.headline()}</h4>
                <p class="meeting-row__plan">{meeting.plan.title}</p>
                <div class="meeting-row__meta">
                    <span>"📅 " {meeting.date}</span>
                    <span>"🕒 " {meeting.time}</span>
                    <span>"📍 " {meeting.plan.location}</span>
                </div>
            </div>
            <span class="chip chip--outline">{meeting.status.label()}</span>
        </div>
    }
}
