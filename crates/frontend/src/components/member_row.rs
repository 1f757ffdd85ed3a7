//! One row of the Welcome Wagon member table.

use web_types::Member;
use yew::prelude::*;

use crate::format::format_join_date;

/// Properties for MemberRow component.
#[derive(Properties, PartialEq)]
pub struct MemberRowProps {
    pub member: Member,
}

/// Table row for one member awaiting graduation.
///
/// The Graduate and View Profile buttons are rendered but not wired to any
/// handler; the corresponding write endpoints do not exist yet.
#[function_component(MemberRow)]
pub fn member_row(props: &MemberRowProps) -> Html {
    let member = &props.member;

    html! {
        <tr class="member-row">
            <td>
                <img
                    class="avatar"
                    src={member.avatar_or_default().to_string()}
                    alt={format!("{}'s avatar", member.display_name)}
                />
            </td>
            <td class="member-name">{ &member.display_name }</td>
            <td>{ format_join_date(member.joined_at.as_deref()) }</td>
            <td>
                <button class="btn btn-success">{"Graduate"}</button>
                <button class="btn btn-primary">{"View Profile"}</button>
            </td>
        </tr>
    }
}
