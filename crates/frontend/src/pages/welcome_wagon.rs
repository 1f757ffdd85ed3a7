//! Welcome Wagon page: lists members awaiting manual review and graduation.

use web_types::Member;
use yew::prelude::*;

use crate::components::MemberRow;
use crate::config::use_api_config;
use crate::fetch::{FetchEvent, FetchState, MountToken, get_json, log_failure};

/// Literal shown in place of rows when the cohort is empty.
const EMPTY_MESSAGE: &str = "No members are currently in the Welcome Wagon.";

/// What the table body shows once the member list has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TableBody<'a> {
    /// One full-width placeholder row carrying this literal.
    Empty(&'static str),
    /// One row per member, in server order.
    Rows(&'a [Member]),
}

/// Decide between the placeholder row and per-member rows.
fn table_body(list: &[Member]) -> TableBody<'_> {
    if list.is_empty() {
        TableBody::Empty(EMPTY_MESSAGE)
    } else {
        TableBody::Rows(list)
    }
}

/// Welcome Wagon page component.
#[function_component(WelcomeWagonPage)]
pub fn welcome_wagon_page() -> Html {
    let config = use_api_config();
    let members = use_reducer(FetchState::<Vec<Member>>::default);

    // One fetch per mount; errors are terminal until the page remounts.
    {
        let members = members.clone();
        let url = config.new_members_url();
        use_effect_with((), move |_| {
            let token = MountToken::new();
            let in_flight = token.clone();
            members.dispatch(FetchEvent::Started);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = get_json::<Vec<Member>>(&url).await;
                if !in_flight.is_live() {
                    return;
                }
                match outcome {
                    Ok(list) => members.dispatch(FetchEvent::Loaded(list)),
                    Err(e) => {
                        let message = e.to_string();
                        log_failure("Failed to fetch new members", &message);
                        members.dispatch(FetchEvent::Failed(message));
                    }
                }
            });
            move || token.revoke()
        });
    }

    html! {
        <main class="page">
            <h1>{"Welcome Wagon"}</h1>
            <div class="card">
                { match &*members {
                    FetchState::Idle | FetchState::Loading => html! {
                        <p>{"Loading new members..."}</p>
                    },
                    FetchState::Failed(message) => html! {
                        <p class="error-text">{ format!("Error: {}", message) }</p>
                    },
                    FetchState::Ready(list) => html! {
                        <div class="table-wrap">
                            <table class="member-table">
                                <thead>
                                    <tr>
                                        <th scope="col">{"Avatar"}</th>
                                        <th scope="col">{"Display Name"}</th>
                                        <th scope="col">{"Joined Server"}</th>
                                        <th scope="col">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { match table_body(list) {
                                        TableBody::Empty(message) => html! {
                                            <tr>
                                                <td colspan="4" class="empty-row">{ message }</td>
                                            </tr>
                                        },
                                        TableBody::Rows(rows) => html! {
                                            { for rows.iter().map(|member| html! {
                                                <MemberRow
                                                    key={member.id.to_string()}
                                                    member={member.clone()}
                                                />
                                            })}
                                        },
                                    }}
                                </tbody>
                            </table>
                        </div>
                    },
                }}
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64, display_name: &str) -> Member {
        Member {
            id,
            name: None,
            discriminator: None,
            display_name: display_name.to_string(),
            avatar_url: None,
            joined_at: None,
        }
    }

    #[test]
    fn empty_cohort_renders_exactly_the_placeholder_row() {
        assert_eq!(
            table_body(&[]),
            TableBody::Empty("No members are currently in the Welcome Wagon.")
        );
    }

    #[test]
    fn settled_cohort_renders_one_row_per_member_in_server_order() {
        let list = vec![member(2, "Grace"), member(1, "Ada")];
        let TableBody::Rows(rows) = table_body(&list) else {
            panic!("non-empty cohort must render rows");
        };
        let ids: Vec<_> = rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, [2, 1]);
    }
}
