use crate::search::{Plan, SearchProblem};

/// Replay a plan action-by-action through the problem's successor function
/// and require that it ends in a goal state.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<(), String>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_state = problem.start_state();
    for action in plan.steps() {
        let successors = problem.successors(&cur_state);
        match successors.into_iter().find(|s| &s.action == action) {
            Some(successor) => cur_state = successor.state,
            None => {
                return Err(format!(
                    "Action {:?} is not applicable in state {:?}",
                    action, cur_state
                ))
            }
        }
    }

    if !problem.is_goal_state(&cur_state) {
        return Err(format!(
            "Plan does not reach a goal state, final state is: {:?}",
            cur_state
        ));
    }

    Ok(())
}
